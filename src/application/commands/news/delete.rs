// src/application/commands/news/delete.rs
use super::NewsCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::news::NewsId,
};

pub struct DeleteNewsCommand {
    pub id: i64,
}

impl NewsCommandService {
    pub async fn delete_news(&self, command: DeleteNewsCommand) -> ApplicationResult<()> {
        let id = NewsId::new(command.id)?;
        let news = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news not found"))?;

        self.write_repo.delete(id).await?;

        if let Some(path) = news.featured_image.as_deref() {
            self.discard_image(path).await;
        }
        tracing::info!(id = %id, slug = %news.slug, "news deleted");
        Ok(())
    }
}
