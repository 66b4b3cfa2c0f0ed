use super::NewsQueryService;
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::NewsSlug,
};

pub struct GetNewsBySlugQuery {
    pub slug: String,
}

impl NewsQueryService {
    pub async fn get_news_by_slug(&self, query: GetNewsBySlugQuery) -> ApplicationResult<NewsDto> {
        let slug =
            NewsSlug::new(query.slug).map_err(|_| ApplicationError::not_found("news not found"))?;
        let news = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news not found"))?;
        Ok(news.into())
    }
}
