use crate::domain::errors::DomainResult;
use crate::domain::news::entity::{NewNews, News, NewsUpdate};
use crate::domain::news::filter::{NewsFilter, NewsSort, PageRequest};
use crate::domain::news::value_objects::{NewsId, NewsSlug, NewsStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait NewsWriteRepository: Send + Sync {
    async fn insert(&self, news: NewNews) -> DomainResult<News>;
    async fn update(&self, update: NewsUpdate) -> DomainResult<News>;
    async fn delete(&self, id: NewsId) -> DomainResult<()>;
    /// Returns the number of rows removed.
    async fn delete_many(&self, ids: &[NewsId]) -> DomainResult<u64>;
    /// Returns the number of rows changed.
    async fn update_status_many(
        &self,
        ids: &[NewsId],
        status: NewsStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<u64>;
    /// Returns the new view count.
    async fn increment_view_count(&self, id: NewsId) -> DomainResult<i64>;
}

#[async_trait]
pub trait NewsReadRepository: Send + Sync {
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<News>>;
    async fn find_by_slug(&self, slug: &NewsSlug) -> DomainResult<Option<News>>;
    async fn find_by_ids(&self, ids: &[NewsId]) -> DomainResult<Vec<News>>;
    async fn list_paginated(
        &self,
        filter: &NewsFilter,
        sort: NewsSort,
        page: PageRequest,
    ) -> DomainResult<(Vec<News>, u64)>;
    /// Published articles sharing the category or any tag of `source`.
    async fn list_related(&self, source: &News, limit: u32) -> DomainResult<Vec<News>>;
}
