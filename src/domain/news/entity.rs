// src/domain/news/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::news::value_objects::{
    Labels, NewsContent, NewsExcerpt, NewsId, NewsSlug, NewsStatus, NewsTitle,
};
use chrono::{DateTime, Utc};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct News {
    pub id: NewsId,
    pub title: NewsTitle,
    pub slug: NewsSlug,
    pub excerpt: NewsExcerpt,
    pub content: NewsContent,
    pub featured_image: Option<String>,
    pub category_id: Option<CategoryId>,
    pub status: NewsStatus,
    pub metadata: Value,
    pub is_featured: bool,
    pub is_breaking: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub tags: Labels,
    pub classifications: Labels,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl News {
    pub fn is_published(&self) -> bool {
        self.status == NewsStatus::Published
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.apply_status(NewsStatus::Published, None, now);
    }

    pub fn apply_status(
        &mut self,
        status: NewsStatus,
        requested_published_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) {
        self.published_at = status.resolve_published_at(self.published_at, requested_published_at, now);
        self.status = status;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: NewsTitle,
    pub slug: NewsSlug,
    pub excerpt: NewsExcerpt,
    pub content: NewsContent,
    pub featured_image: Option<String>,
    pub category_id: Option<CategoryId>,
    pub status: NewsStatus,
    pub metadata: Value,
    pub is_featured: bool,
    pub is_breaking: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub tags: Labels,
    pub classifications: Labels,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update. `None` leaves the column untouched; nested options clear it.
#[derive(Debug, Clone)]
pub struct NewsUpdate {
    pub id: NewsId,
    pub title: Option<NewsTitle>,
    pub slug: Option<NewsSlug>,
    pub excerpt: Option<NewsExcerpt>,
    pub content: Option<NewsContent>,
    pub featured_image: Option<Option<String>>,
    pub category_id: Option<Option<CategoryId>>,
    pub status: Option<NewsStatus>,
    pub metadata: Option<Value>,
    pub is_featured: Option<bool>,
    pub is_breaking: Option<bool>,
    pub published_at: Option<Option<DateTime<Utc>>>,
    pub tags: Option<Labels>,
    pub classifications: Option<Labels>,
    pub updated_at: DateTime<Utc>,
}

impl NewsUpdate {
    pub fn new(id: NewsId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            excerpt: None,
            content: None,
            featured_image: None,
            category_id: None,
            status: None,
            metadata: None,
            is_featured: None,
            is_breaking: None,
            published_at: None,
            tags: None,
            classifications: None,
            updated_at,
        }
    }

    pub fn with_status(mut self, status: NewsStatus, published_at: Option<DateTime<Utc>>) -> Self {
        self.status = Some(status);
        self.published_at = Some(published_at);
        self
    }

    pub fn with_featured_image(mut self, path: Option<String>) -> Self {
        self.featured_image = Some(path);
        self
    }

    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.slug.is_some()
            || self.excerpt.is_some()
            || self.content.is_some()
            || self.featured_image.is_some()
            || self.category_id.is_some()
            || self.status.is_some()
            || self.metadata.is_some()
            || self.is_featured.is_some()
            || self.is_breaking.is_some()
            || self.published_at.is_some()
            || self.tags.is_some()
            || self.classifications.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_news() -> News {
        let now = Utc::now();
        News {
            id: NewsId::new(1).unwrap(),
            title: NewsTitle::new("Team selected for the Games").unwrap(),
            slug: NewsSlug::new("team-selected-for-the-games").unwrap(),
            excerpt: NewsExcerpt::new("Squad announced").unwrap(),
            content: NewsContent::new("Full announcement").unwrap(),
            featured_image: None,
            category_id: None,
            status: NewsStatus::Draft,
            metadata: Value::Object(Default::default()),
            is_featured: false,
            is_breaking: false,
            published_at: None,
            tags: Labels::default(),
            classifications: Labels::default(),
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn publish_stamps_timestamp_once() {
        let mut news = sample_news();
        let first = Utc::now();
        news.publish(first);
        assert!(news.is_published());
        assert_eq!(news.published_at, Some(first));

        let later = first + Duration::hours(1);
        news.publish(later);
        assert_eq!(news.published_at, Some(first));
        assert_eq!(news.updated_at, later);
    }

    #[test]
    fn returning_to_draft_clears_timestamp() {
        let mut news = sample_news();
        let now = Utc::now();
        news.publish(now);
        news.apply_status(NewsStatus::Draft, None, now);
        assert_eq!(news.status, NewsStatus::Draft);
        assert!(news.published_at.is_none());
    }

    #[test]
    fn empty_update_reports_no_changes() {
        let update = NewsUpdate::new(NewsId::new(3).unwrap(), Utc::now());
        assert!(!update.has_changes());
        assert!(update.with_featured_image(None).has_changes());
    }
}
