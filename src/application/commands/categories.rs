// src/application/commands/categories.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::category::{CategoryId, CategoryName, CategoryRepository, CategorySlug, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
}

pub struct DeleteCategoryCommand {
    pub id: i64,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
    slugger: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slugger,
            clock,
        }
    }

    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug = CategorySlug::new(self.slugger.slugify(name.as_str()))?;
        let created = self
            .repo
            .insert(NewCategory {
                name,
                slug,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(id = %created.id, slug = created.slug.as_str(), "category created");
        Ok(created.into())
    }

    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
