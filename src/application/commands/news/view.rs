use super::NewsCommandService;
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::NewsSlug,
};

pub struct RecordViewCommand {
    pub slug: String,
}

impl NewsCommandService {
    /// Fetch a published article for a public reader and count the view.
    pub async fn record_view(&self, command: RecordViewCommand) -> ApplicationResult<NewsDto> {
        let slug = NewsSlug::new(command.slug)
            .map_err(|_| ApplicationError::not_found("news not found"))?;
        let news = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|news| news.is_published())
            .ok_or_else(|| ApplicationError::not_found("news not found"))?;

        let view_count = self.write_repo.increment_view_count(news.id).await?;
        let mut dto = NewsDto::from(news);
        dto.view_count = view_count;
        Ok(dto)
    }
}
