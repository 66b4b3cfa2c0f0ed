use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::value_objects::NewsStatus;
use chrono::{DateTime, Utc};
use std::str::FromStr;

#[derive(Debug, Clone, Default)]
pub struct NewsFilter {
    pub search: Option<String>,
    pub status: Option<NewsStatus>,
    pub category_id: Option<CategoryId>,
    pub classifications: Vec<String>,
    pub tags: Vec<String>,
    /// Inclusive lower bound on the publication (or creation) time.
    pub date_from: Option<DateTime<Utc>>,
    /// Exclusive upper bound.
    pub date_to: Option<DateTime<Utc>>,
    pub featured: Option<bool>,
    pub breaking: Option<bool>,
}

impl NewsFilter {
    pub fn published() -> Self {
        Self {
            status: Some(NewsStatus::Published),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    PublishedAt,
    Title,
    ViewCount,
}

impl NewsSortField {
    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::PublishedAt => "published_at",
            Self::Title => "title",
            Self::ViewCount => "view_count",
        }
    }
}

impl FromStr for NewsSortField {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            "updatedAt" | "updated_at" => Ok(Self::UpdatedAt),
            "publishedAt" | "published_at" => Ok(Self::PublishedAt),
            "title" => Ok(Self::Title),
            "viewCount" | "view_count" => Ok(Self::ViewCount),
            _ => Err(DomainError::Validation(
                "sortBy must be one of: createdAt, updatedAt, publishedAt, title, viewCount".into(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(DomainError::Validation(
                "sortOrder must be either asc or desc".into(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewsSort {
    pub field: NewsSortField,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    pub fn new(page: u32, limit: u32) -> DomainResult<Self> {
        if page == 0 {
            return Err(DomainError::Validation("page must be at least 1".into()));
        }
        if limit == 0 {
            return Err(DomainError::Validation("limit must be at least 1".into()));
        }
        Ok(Self {
            page,
            limit: limit.min(Self::MAX_LIMIT),
        })
    }

    pub fn page(self) -> u32 {
        self.page
    }

    pub fn limit(self) -> u32 {
        self.limit
    }

    pub fn offset(self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}
