use super::NewsQueryService;
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
        input,
    },
    domain::news::NewsSlug,
};

const DEFAULT_RELATED: u32 = 3;
const MAX_RELATED: u32 = 10;

pub struct RelatedNewsQuery {
    pub slug: String,
    pub limit: Option<String>,
}

impl NewsQueryService {
    pub async fn related_news(&self, query: RelatedNewsQuery) -> ApplicationResult<Vec<NewsDto>> {
        let limit = match input::non_blank(query.limit) {
            Some(raw) => input::parse_u32("limit", &raw)?,
            None => DEFAULT_RELATED,
        };
        if limit == 0 {
            return Err(ApplicationError::validation("limit must be at least 1"));
        }

        let slug =
            NewsSlug::new(query.slug).map_err(|_| ApplicationError::not_found("news not found"))?;
        let source = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|news| news.is_published())
            .ok_or_else(|| ApplicationError::not_found("news not found"))?;

        let related = self
            .read_repo
            .list_related(&source, limit.min(MAX_RELATED))
            .await?;
        Ok(related.into_iter().map(Into::into).collect())
    }
}
