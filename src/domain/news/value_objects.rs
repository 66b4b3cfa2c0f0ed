use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const MAX_TITLE_CHARS: usize = 255;
const MAX_EXCERPT_CHARS: usize = 1000;
const MAX_LABELS: usize = 50;
const MAX_LABEL_CHARS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewsId(i64);

impl NewsId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("news id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<NewsId> for i64 {
    fn from(value: NewsId) -> Self {
        value.0
    }
}

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn required_text(field: &str, value: String, max_chars: Option<usize>) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    if let Some(max) = max_chars {
        if trimmed.chars().count() > max {
            return Err(DomainError::Validation(format!(
                "{field} must be at most {max} characters"
            )));
        }
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsTitle(String);

impl NewsTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("title", value.into(), Some(MAX_TITLE_CHARS)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NewsTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe identifier: lowercase ASCII letters, digits and single hyphens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSlug(String);

impl NewsSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let well_formed = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--");
        if !well_formed {
            return Err(DomainError::Validation(
                "slug may only contain lowercase letters, digits and single hyphens".into(),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NewsSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsExcerpt(String);

impl NewsExcerpt {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("excerpt", value.into(), Some(MAX_EXCERPT_CHARS)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsContent(String);

impl NewsContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        required_text("content", value.into(), None).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NewsStatus {
    Draft,
    Published,
    Archived,
}

impl NewsStatus {
    pub const ALL: [NewsStatus; 3] = [Self::Draft, Self::Published, Self::Archived];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    /// Publish timestamp an article should carry after moving to this status.
    pub fn resolve_published_at(
        self,
        current: Option<DateTime<Utc>>,
        requested: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        match self {
            Self::Published => Some(requested.or(current).unwrap_or(now)),
            Self::Archived => requested.or(current),
            Self::Draft => None,
        }
    }
}

impl FromStr for NewsStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(DomainError::Validation(
                "Invalid status. Must be one of: draft, published, archived".into(),
            )),
        }
    }
}

impl fmt::Display for NewsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, de-duplicated set of free-form labels (tags or classifications).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels(Vec<String>);

impl Labels {
    pub fn new(field: &str, values: Vec<String>) -> DomainResult<Self> {
        let mut labels: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            let value = value.trim();
            if value.is_empty() || labels.iter().any(|existing| existing == value) {
                continue;
            }
            if value.chars().count() > MAX_LABEL_CHARS {
                return Err(DomainError::Validation(format!(
                    "{field} entries must be at most {MAX_LABEL_CHARS} characters"
                )));
            }
            labels.push(value.to_string());
        }
        if labels.len() > MAX_LABELS {
            return Err(DomainError::Validation(format!(
                "{field} may contain at most {MAX_LABELS} entries"
            )));
        }
        Ok(Self(labels))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_title_is_rejected() {
        let err = NewsTitle::new("   ").unwrap_err();
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn text_values_are_trimmed() {
        let excerpt = NewsExcerpt::new("  short summary \n").unwrap();
        assert_eq!(excerpt.as_str(), "short summary");
    }

    #[test]
    fn overlong_title_is_rejected() {
        let long = "a".repeat(MAX_TITLE_CHARS + 1);
        assert!(NewsTitle::new(long).is_err());
    }

    #[test]
    fn slug_rejects_uppercase_and_double_hyphen() {
        assert!(NewsSlug::new("Team-News").is_err());
        assert!(NewsSlug::new("team--news").is_err());
        assert!(NewsSlug::new("-team").is_err());
        assert!(NewsSlug::new("team-news-2024").is_ok());
    }

    #[test]
    fn status_parses_only_known_values() {
        assert_eq!("published".parse::<NewsStatus>().unwrap(), NewsStatus::Published);
        let err = "deleted".parse::<NewsStatus>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid status. Must be one of: draft, published, archived"
        );
        assert!("Published".parse::<NewsStatus>().is_err());
    }

    #[test]
    fn published_at_resolution_follows_status() {
        let now = Utc::now();
        let earlier = now - chrono::Duration::days(2);

        assert_eq!(NewsStatus::Published.resolve_published_at(None, None, now), Some(now));
        assert_eq!(
            NewsStatus::Published.resolve_published_at(Some(earlier), None, now),
            Some(earlier)
        );
        assert_eq!(
            NewsStatus::Archived.resolve_published_at(Some(earlier), None, now),
            Some(earlier)
        );
        assert_eq!(NewsStatus::Draft.resolve_published_at(Some(earlier), None, now), None);
    }

    #[test]
    fn labels_are_trimmed_and_deduplicated() {
        let labels = Labels::new(
            "tags",
            vec![" swimming ".into(), "".into(), "swimming".into(), "athletics".into()],
        )
        .unwrap();
        assert_eq!(labels.as_slice(), ["swimming", "athletics"]);
    }

    #[test]
    fn labels_reject_too_many_entries() {
        let values = (0..=MAX_LABELS).map(|i| format!("tag-{i}")).collect();
        assert!(Labels::new("tags", values).is_err());
    }
}
