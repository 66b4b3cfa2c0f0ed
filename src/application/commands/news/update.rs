use super::{NewsCommandService, NewsFields, image::image_extension};
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
        input,
        ports::storage::ImageUpload,
    },
    domain::news::{News, NewsContent, NewsExcerpt, NewsId, NewsTitle, NewsUpdate},
};

pub struct UpdateNewsCommand {
    pub id: i64,
    pub fields: NewsFields,
    pub image: Option<ImageUpload>,
    pub remove_image: bool,
}

impl NewsCommandService {
    pub async fn update_news(&self, command: UpdateNewsCommand) -> ApplicationResult<NewsDto> {
        let id = NewsId::new(command.id)?;
        let current = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news not found"))?;

        let UpdateNewsCommand {
            id: _,
            fields,
            image,
            remove_image,
        } = command;

        let now = self.clock.now();
        let update = self.build_update(&current, fields, now).await?;
        let image_ext = image.as_ref().map(image_extension).transpose()?;

        let (update, new_image) = match (image, image_ext) {
            (Some(upload), Some(ext)) => {
                let path = self.store_image(upload, ext).await?;
                (update.with_featured_image(Some(path.clone())), Some(path))
            }
            _ if remove_image => (update.with_featured_image(None), None),
            _ => (update, None),
        };

        if !update.has_changes() {
            return Ok(current.into());
        }

        let replaces_image = update.featured_image.is_some();
        match self.write_repo.update(update).await {
            Ok(updated) => {
                if replaces_image {
                    if let Some(old) = current.featured_image.as_deref() {
                        if updated.featured_image.as_deref() != Some(old) {
                            self.discard_image(old).await;
                        }
                    }
                }
                tracing::info!(id = %updated.id, "news updated");
                Ok(updated.into())
            }
            Err(err) => {
                if let Some(path) = new_image.as_deref() {
                    self.discard_image(path).await;
                }
                Err(err.into())
            }
        }
    }

    /// Validate only the supplied fields; everything else stays untouched.
    async fn build_update(
        &self,
        current: &News,
        fields: NewsFields,
        now: chrono::DateTime<chrono::Utc>,
    ) -> ApplicationResult<NewsUpdate> {
        let mut update = NewsUpdate::new(current.id, now);

        if let Some(title) = fields.title {
            update.title = Some(NewsTitle::new(title)?);
        }
        if let Some(excerpt) = fields.excerpt {
            update.excerpt = Some(NewsExcerpt::new(excerpt)?);
        }
        if let Some(content) = fields.content {
            update.content = Some(NewsContent::new(content)?);
        }
        if let Some(raw) = fields.category_id {
            let category_id = input::parse_optional_category_id(&raw)?;
            if let Some(category) = category_id {
                self.ensure_category_exists(category).await?;
            }
            update.category_id = Some(category_id);
        }
        if let Some(raw) = fields.tags {
            update.tags = Some(input::parse_json_labels("tags", &raw)?);
        }
        if let Some(raw) = fields.classifications {
            update.classifications = Some(input::parse_json_labels("classifications", &raw)?);
        }
        if let Some(raw) = fields.metadata {
            update.metadata = Some(input::parse_metadata(&raw)?);
        }
        if let Some(raw) = fields.is_featured {
            update.is_featured = Some(input::parse_flag("isFeatured", &raw)?);
        }
        if let Some(raw) = fields.is_breaking {
            update.is_breaking = Some(input::parse_flag("isBreaking", &raw)?);
        }

        let requested_published_at = input::non_blank(fields.published_at)
            .map(|raw| input::parse_timestamp("publishedAt", &raw))
            .transpose()?;
        match input::non_blank(fields.status) {
            Some(raw) => {
                let status = input::parse_status(&raw)?;
                let published_at =
                    status.resolve_published_at(current.published_at, requested_published_at, now);
                update = update.with_status(status, published_at);
            }
            None => {
                if requested_published_at.is_some() {
                    update.published_at = Some(current.status.resolve_published_at(
                        current.published_at,
                        requested_published_at,
                        now,
                    ));
                }
            }
        }

        if let Some(raw) = fields.slug {
            update.slug = Some(self.slug_service.claim_slug(&raw, Some(current.id)).await?);
        }

        Ok(update)
    }
}
