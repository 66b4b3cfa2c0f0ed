// tests/support/mocks/repos.rs
use chrono::{DateTime, Utc};
use npc_newsroom::domain::{
    errors::{DomainError, DomainResult},
    news::{NewNews, News, NewsId, NewsStatus, NewsTitle, NewsUpdate, NewsWriteRepository},
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Write repository whose every mutation fails as if the database were gone.
pub struct FailingNewsWriteRepo;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("database unavailable".into()))
}

#[async_trait::async_trait]
impl NewsWriteRepository for FailingNewsWriteRepo {
    async fn insert(&self, _news: NewNews) -> DomainResult<News> {
        unavailable()
    }

    async fn update(&self, _update: NewsUpdate) -> DomainResult<News> {
        unavailable()
    }

    async fn delete(&self, _id: NewsId) -> DomainResult<()> {
        unavailable()
    }

    async fn delete_many(&self, _ids: &[NewsId]) -> DomainResult<u64> {
        unavailable()
    }

    async fn update_status_many(
        &self,
        _ids: &[NewsId],
        _status: NewsStatus,
        _now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        unavailable()
    }

    async fn increment_view_count(&self, _id: NewsId) -> DomainResult<i64> {
        unavailable()
    }
}

/// Write repository where another writer slips in a story with the same slug
/// just before the first insert lands.
pub struct RacingNewsWriteRepo {
    inner: Arc<dyn NewsWriteRepository>,
    raced: AtomicBool,
}

impl RacingNewsWriteRepo {
    pub fn new(inner: Arc<dyn NewsWriteRepository>) -> Self {
        Self {
            inner,
            raced: AtomicBool::new(false),
        }
    }
}

#[async_trait::async_trait]
impl NewsWriteRepository for RacingNewsWriteRepo {
    async fn insert(&self, news: NewNews) -> DomainResult<News> {
        if !self.raced.swap(true, Ordering::SeqCst) {
            let mut rival = news.clone();
            rival.title = NewsTitle::new("Rival Story")?;
            self.inner.insert(rival).await?;
        }
        self.inner.insert(news).await
    }

    async fn update(&self, update: NewsUpdate) -> DomainResult<News> {
        self.inner.update(update).await
    }

    async fn delete(&self, id: NewsId) -> DomainResult<()> {
        self.inner.delete(id).await
    }

    async fn delete_many(&self, ids: &[NewsId]) -> DomainResult<u64> {
        self.inner.delete_many(ids).await
    }

    async fn update_status_many(
        &self,
        ids: &[NewsId],
        status: NewsStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        self.inner.update_status_many(ids, status, now).await
    }

    async fn increment_view_count(&self, id: NewsId) -> DomainResult<i64> {
        self.inner.increment_view_count(id).await
    }
}
