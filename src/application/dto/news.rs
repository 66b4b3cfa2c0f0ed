use crate::domain::news::{News, NewsStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category_id: Option<i64>,
    pub status: NewsStatus,
    #[schema(value_type = Object)]
    pub metadata: serde_json::Value,
    pub is_featured: bool,
    pub is_breaking: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub classifications: Vec<String>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<News> for NewsDto {
    fn from(news: News) -> Self {
        Self {
            id: news.id.into(),
            title: news.title.into_inner(),
            slug: news.slug.into_inner(),
            excerpt: news.excerpt.into_inner(),
            content: news.content.into_inner(),
            featured_image: news.featured_image,
            category_id: news.category_id.map(Into::into),
            status: news.status,
            metadata: news.metadata,
            is_featured: news.is_featured,
            is_breaking: news.is_breaking,
            published_at: news.published_at,
            tags: news.tags.into_inner(),
            classifications: news.classifications.into_inner(),
            view_count: news.view_count,
            created_at: news.created_at,
            updated_at: news.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkOutcomeDto {
    pub action: String,
    pub requested: usize,
    pub affected: u64,
}
