// src/application/commands/news/publish.rs
use super::NewsCommandService;
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::{NewsId, NewsUpdate},
};

pub struct PublishNewsCommand {
    pub id: i64,
}

impl NewsCommandService {
    pub async fn publish_news(&self, command: PublishNewsCommand) -> ApplicationResult<NewsDto> {
        let id = NewsId::new(command.id)?;
        let mut news = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news not found"))?;

        if news.is_published() && news.published_at.is_some() {
            return Ok(news.into());
        }

        let now = self.clock.now();
        news.publish(now);

        let update = NewsUpdate::new(id, news.updated_at).with_status(news.status, news.published_at);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(id = %updated.id, "news published");
        Ok(updated.into())
    }
}
