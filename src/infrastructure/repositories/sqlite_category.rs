use super::map_sqlx;
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySlug, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCategoryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: CategorySlug::new(row.slug)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            slug,
            created_at,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug, created_at) VALUES (?, ?, ?) \
             RETURNING id, name, slug, created_at",
        )
        .bind(name.into_inner())
        .bind(slug.into_inner())
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at FROM categories WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at FROM categories ORDER BY name COLLATE NOCASE, id",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
