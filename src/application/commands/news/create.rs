// src/application/commands/news/create.rs
use super::{NewsCommandService, NewsFields, image::image_extension};
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
        input,
        ports::storage::ImageUpload,
    },
    domain::{
        category::CategoryId,
        errors::{DomainError, DomainResult},
        news::{Labels, NewNews, News, NewsContent, NewsExcerpt, NewsStatus, NewsTitle},
    },
};

const GENERATED_SLUG_ATTEMPTS: u32 = 3;

pub struct CreateNewsCommand {
    pub fields: NewsFields,
    pub image: Option<ImageUpload>,
}

impl NewsCommandService {
    pub async fn create_news(&self, command: CreateNewsCommand) -> ApplicationResult<NewsDto> {
        let CreateNewsCommand { fields, image } = command;

        let title = NewsTitle::new(fields.title.unwrap_or_default())?;
        let excerpt = NewsExcerpt::new(fields.excerpt.unwrap_or_default())?;
        let content = NewsContent::new(fields.content.unwrap_or_default())?;

        let status = match input::non_blank(fields.status) {
            Some(raw) => input::parse_status(&raw)?,
            None => NewsStatus::Draft,
        };
        let category_id = input::non_blank(fields.category_id)
            .map(|raw| input::parse_category_id(&raw))
            .transpose()?;
        let tags = match fields.tags {
            Some(raw) => input::parse_json_labels("tags", &raw)?,
            None => Labels::default(),
        };
        let classifications = match fields.classifications {
            Some(raw) => input::parse_json_labels("classifications", &raw)?,
            None => Labels::default(),
        };
        let metadata = input::parse_metadata(fields.metadata.as_deref().unwrap_or_default())?;
        let is_featured = input::non_blank(fields.is_featured)
            .map(|raw| input::parse_flag("isFeatured", &raw))
            .transpose()?
            .unwrap_or(false);
        let is_breaking = input::non_blank(fields.is_breaking)
            .map(|raw| input::parse_flag("isBreaking", &raw))
            .transpose()?
            .unwrap_or(false);
        let requested_published_at = input::non_blank(fields.published_at)
            .map(|raw| input::parse_timestamp("publishedAt", &raw))
            .transpose()?;
        let image_ext = image.as_ref().map(image_extension).transpose()?;

        if let Some(id) = category_id {
            self.ensure_category_exists(id).await?;
        }

        let requested_slug = input::non_blank(fields.slug);
        let slug = match requested_slug.as_deref() {
            Some(raw) => self.slug_service.claim_slug(raw, None).await?,
            None => self.slug_service.generate_unique_slug(&title, None).await?,
        };

        let now = self.clock.now();
        let featured_image = match (image, image_ext) {
            (Some(upload), Some(ext)) => Some(self.store_image(upload, ext).await?),
            _ => None,
        };

        let new_news = NewNews {
            title,
            slug,
            excerpt,
            content,
            featured_image: featured_image.clone(),
            category_id,
            status,
            metadata,
            is_featured,
            is_breaking,
            published_at: status.resolve_published_at(None, requested_published_at, now),
            tags,
            classifications,
            created_at: now,
            updated_at: now,
        };

        let inserted = if requested_slug.is_some() {
            self.write_repo.insert(new_news).await
        } else {
            self.insert_with_generated_slug(new_news).await
        };

        match inserted {
            Ok(created) => {
                tracing::info!(id = %created.id, slug = %created.slug, status = %created.status, "news created");
                Ok(created.into())
            }
            Err(err) => {
                if let Some(path) = featured_image.as_deref() {
                    self.discard_image(path).await;
                }
                Err(err.into())
            }
        }
    }

    /// A concurrent create can take a derived slug between the uniqueness
    /// check and the insert; derive a fresh one and try again. The slug is
    /// the only unique column on news, so a conflict here is always a slug clash.
    async fn insert_with_generated_slug(&self, mut new_news: NewNews) -> DomainResult<News> {
        let mut attempt = 1;
        loop {
            match self.write_repo.insert(new_news.clone()).await {
                Err(DomainError::Conflict(reason)) if attempt < GENERATED_SLUG_ATTEMPTS => {
                    tracing::debug!(slug = %new_news.slug, %reason, attempt, "derived slug taken at insert; retrying");
                    new_news.slug = self
                        .slug_service
                        .generate_unique_slug(&new_news.title, None)
                        .await?;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    pub(super) async fn ensure_category_exists(&self, id: CategoryId) -> ApplicationResult<()> {
        match self.category_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::validation(format!(
                "category {id} does not exist"
            ))),
        }
    }
}
