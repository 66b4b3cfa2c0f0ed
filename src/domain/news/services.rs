// src/domain/news/services.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::repository::NewsReadRepository;
use crate::domain::news::value_objects::{NewsId, NewsSlug, NewsTitle};

/// Domain service responsible for producing unique slugs for news articles.
pub struct NewsSlugService {
    read_repo: Arc<dyn NewsReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl NewsSlugService {
    pub fn new(read_repo: Arc<dyn NewsReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &NewsTitle,
        ignore_id: Option<NewsId>,
    ) -> DomainResult<NewsSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            format!("news-{}", Utc::now().timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = NewsSlug::new(candidate.clone())?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if ignore_id == Some(existing.id) => return Ok(slug),
                Some(_) => {
                    candidate = format!("{base_slug}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }

    /// Normalises a caller-supplied slug and rejects it when another article owns it.
    pub async fn claim_slug(&self, requested: &str, ignore_id: Option<NewsId>) -> DomainResult<NewsSlug> {
        let normalized = self.generator.slugify(requested);
        if normalized.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let slug = NewsSlug::new(normalized)?;
        match self.read_repo.find_by_slug(&slug).await? {
            Some(existing) if ignore_id != Some(existing.id) => Err(DomainError::Conflict(format!(
                "slug '{slug}' is already in use"
            ))),
            _ => Ok(slug),
        }
    }
}
