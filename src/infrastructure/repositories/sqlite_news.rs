use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::{
    Labels, NewNews, News, NewsContent, NewsExcerpt, NewsFilter, NewsId, NewsReadRepository,
    NewsSlug, NewsSort, NewsSortField, NewsStatus, NewsTitle, NewsUpdate, NewsWriteRepository,
    PageRequest,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

macro_rules! news_columns {
    () => {
        "id, title, slug, excerpt, content, featured_image, category_id, status, metadata, \
         is_featured, is_breaking, published_at, tags, classifications, view_count, \
         created_at, updated_at"
    };
}

#[derive(Clone)]
pub struct SqliteNewsWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteNewsWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteNewsReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteNewsReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NewsRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    featured_image: Option<String>,
    category_id: Option<i64>,
    status: String,
    metadata: String,
    is_featured: bool,
    is_breaking: bool,
    published_at: Option<DateTime<Utc>>,
    tags: String,
    classifications: String,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn decode_labels(field: &str, raw: &str) -> DomainResult<Labels> {
    let values: Vec<String> = serde_json::from_str(raw)
        .map_err(|err| DomainError::Persistence(format!("corrupt {field} column: {err}")))?;
    Labels::new(field, values)
}

fn encode_labels(labels: &Labels) -> DomainResult<String> {
    serde_json::to_string(labels.as_slice()).map_err(|err| DomainError::Persistence(err.to_string()))
}

/// Lowercased title, excerpt and content. SQLite `LIKE` only folds ASCII, so
/// search matches against this column instead of the raw text.
fn search_document(title: &str, excerpt: &str, content: &str) -> String {
    format!("{title}\n{excerpt}\n{content}").to_lowercase()
}

fn encode_metadata(metadata: &serde_json::Value) -> DomainResult<String> {
    serde_json::to_string(metadata).map_err(|err| DomainError::Persistence(err.to_string()))
}

impl TryFrom<NewsRow> for News {
    type Error = DomainError;

    fn try_from(row: NewsRow) -> Result<Self, Self::Error> {
        let metadata = serde_json::from_str(&row.metadata)
            .map_err(|err| DomainError::Persistence(format!("corrupt metadata column: {err}")))?;
        Ok(News {
            id: NewsId::new(row.id)?,
            title: NewsTitle::new(row.title)?,
            slug: NewsSlug::new(row.slug)?,
            excerpt: NewsExcerpt::new(row.excerpt)?,
            content: NewsContent::new(row.content)?,
            featured_image: row.featured_image,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            status: row.status.parse()?,
            metadata,
            is_featured: row.is_featured,
            is_breaking: row.is_breaking,
            published_at: row.published_at,
            tags: decode_labels("tags", &row.tags)?,
            classifications: decode_labels("classifications", &row.classifications)?,
            view_count: row.view_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn rows_into_news(rows: Vec<NewsRow>) -> DomainResult<Vec<News>> {
    rows.into_iter().map(News::try_from).collect()
}

fn push_id_list(builder: &mut QueryBuilder<'_, Sqlite>, ids: &[NewsId]) {
    builder.push(" IN (");
    let mut list = builder.separated(", ");
    for id in ids {
        list.push_bind(i64::from(*id));
    }
    list.push_unseparated(")");
}

#[async_trait]
impl NewsWriteRepository for SqliteNewsWriteRepository {
    async fn insert(&self, news: NewNews) -> DomainResult<News> {
        let tags = encode_labels(&news.tags)?;
        let classifications = encode_labels(&news.classifications)?;
        let metadata = encode_metadata(&news.metadata)?;
        let search_text = search_document(
            news.title.as_str(),
            news.excerpt.as_str(),
            news.content.as_str(),
        );

        let row = sqlx::query_as::<_, NewsRow>(concat!(
            "INSERT INTO news (title, slug, excerpt, content, featured_image, category_id, status, \
             metadata, is_featured, is_breaking, published_at, tags, classifications, search_text, \
             created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING ",
            news_columns!()
        ))
        .bind(news.title.as_str())
        .bind(news.slug.as_str())
        .bind(news.excerpt.as_str())
        .bind(news.content.as_str())
        .bind(news.featured_image.as_deref())
        .bind(news.category_id.map(i64::from))
        .bind(news.status.as_str())
        .bind(metadata)
        .bind(news.is_featured)
        .bind(news.is_breaking)
        .bind(news.published_at)
        .bind(tags)
        .bind(classifications)
        .bind(search_text)
        .bind(news.created_at)
        .bind(news.updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        News::try_from(row)
    }

    async fn update(&self, update: NewsUpdate) -> DomainResult<News> {
        let NewsUpdate {
            id,
            title,
            slug,
            excerpt,
            content,
            featured_image,
            category_id,
            status,
            metadata,
            is_featured,
            is_breaking,
            published_at,
            tags,
            classifications,
            updated_at,
        } = update;
        let touches_text = title.is_some() || excerpt.is_some() || content.is_some();

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE news SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(image) = featured_image {
            builder.push(", featured_image = ");
            builder.push_bind(image);
        }
        if let Some(category) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(category.map(i64::from));
        }
        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(metadata) = metadata {
            builder.push(", metadata = ");
            builder.push_bind(encode_metadata(&metadata)?);
        }
        if let Some(flag) = is_featured {
            builder.push(", is_featured = ");
            builder.push_bind(flag);
        }
        if let Some(flag) = is_breaking {
            builder.push(", is_breaking = ");
            builder.push_bind(flag);
        }
        if let Some(published_at) = published_at {
            builder.push(", published_at = ");
            builder.push_bind(published_at);
        }
        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(encode_labels(&tags)?);
        }
        if let Some(classifications) = classifications {
            builder.push(", classifications = ");
            builder.push_bind(encode_labels(&classifications)?);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(concat!(" RETURNING ", news_columns!()));

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = builder
            .build_query_as::<NewsRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("news not found".into()))?;

        if touches_text {
            sqlx::query("UPDATE news SET search_text = ? WHERE id = ?")
                .bind(search_document(&row.title, &row.excerpt, &row.content))
                .bind(row.id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }
        tx.commit().await.map_err(map_sqlx)?;

        News::try_from(row)
    }

    async fn delete(&self, id: NewsId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM news WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("news not found".into()));
        }
        Ok(())
    }

    async fn delete_many(&self, ids: &[NewsId]) -> DomainResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("DELETE FROM news WHERE id");
        push_id_list(&mut builder, ids);

        let result = builder
            .build()
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn update_status_many(
        &self,
        ids: &[NewsId],
        status: NewsStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE news SET status = ");
        builder.push_bind(status.as_str());
        builder.push(", updated_at = ");
        builder.push_bind(now);
        // mirrors NewsStatus::resolve_published_at with no requested timestamp
        match status {
            NewsStatus::Published => {
                builder.push(", published_at = COALESCE(published_at, ");
                builder.push_bind(now);
                builder.push(")");
            }
            NewsStatus::Draft => {
                builder.push(", published_at = NULL");
            }
            NewsStatus::Archived => {}
        }
        builder.push(" WHERE id");
        push_id_list(&mut builder, ids);

        let result = builder
            .build()
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn increment_view_count(&self, id: NewsId) -> DomainResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE news SET view_count = view_count + 1 WHERE id = ? RETURNING view_count",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("news not found".into()))
    }
}

/// Emits ` WHERE ` before the first condition and ` AND ` before the rest.
#[derive(Default)]
struct Conditions {
    started: bool,
}

impl Conditions {
    fn next(&mut self, builder: &mut QueryBuilder<'_, Sqlite>) {
        builder.push(if self.started { " AND " } else { " WHERE " });
        self.started = true;
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn push_any_label(builder: &mut QueryBuilder<'_, Sqlite>, column: &str, values: &[String]) {
    builder.push(format!(
        "EXISTS (SELECT 1 FROM json_each(news.{column}) WHERE json_each.value IN ("
    ));
    let mut list = builder.separated(", ");
    for value in values {
        list.push_bind(value.clone());
    }
    list.push_unseparated("))");
}

impl SqliteNewsReadRepository {
    fn apply_conditions(builder: &mut QueryBuilder<'_, Sqlite>, filter: &NewsFilter) {
        let mut conditions = Conditions::default();

        if let Some(status) = filter.status {
            conditions.next(builder);
            builder.push("status = ");
            builder.push_bind(status.as_str());
        }

        if let Some(search) = filter.search.as_deref() {
            let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
            conditions.next(builder);
            builder.push("search_text LIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\'");
        }

        if let Some(category) = filter.category_id {
            conditions.next(builder);
            builder.push("category_id = ");
            builder.push_bind(i64::from(category));
        }

        if !filter.tags.is_empty() {
            conditions.next(builder);
            push_any_label(builder, "tags", &filter.tags);
        }

        if !filter.classifications.is_empty() {
            conditions.next(builder);
            push_any_label(builder, "classifications", &filter.classifications);
        }

        if let Some(from) = filter.date_from {
            conditions.next(builder);
            builder.push("COALESCE(published_at, created_at) >= ");
            builder.push_bind(from);
        }

        if let Some(to) = filter.date_to {
            conditions.next(builder);
            builder.push("COALESCE(published_at, created_at) < ");
            builder.push_bind(to);
        }

        if let Some(featured) = filter.featured {
            conditions.next(builder);
            builder.push("is_featured = ");
            builder.push_bind(featured);
        }

        if let Some(breaking) = filter.breaking {
            conditions.next(builder);
            builder.push("is_breaking = ");
            builder.push_bind(breaking);
        }
    }

    fn order_expression(field: NewsSortField) -> &'static str {
        match field {
            NewsSortField::Title => "title COLLATE NOCASE",
            other => other.column(),
        }
    }
}

#[async_trait]
impl NewsReadRepository for SqliteNewsReadRepository {
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<News>> {
        let row = sqlx::query_as::<_, NewsRow>(concat!(
            "SELECT ",
            news_columns!(),
            " FROM news WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(News::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &NewsSlug) -> DomainResult<Option<News>> {
        let row = sqlx::query_as::<_, NewsRow>(concat!(
            "SELECT ",
            news_columns!(),
            " FROM news WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(News::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[NewsId]) -> DomainResult<Vec<News>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(concat!("SELECT ", news_columns!(), " FROM news WHERE id"));
        push_id_list(&mut builder, ids);
        builder.push(" ORDER BY id");

        let rows = builder
            .build_query_as::<NewsRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        rows_into_news(rows)
    }

    async fn list_paginated(
        &self,
        filter: &NewsFilter,
        sort: NewsSort,
        page: PageRequest,
    ) -> DomainResult<(Vec<News>, u64)> {
        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(concat!("SELECT ", news_columns!(), " FROM news"));
        Self::apply_conditions(&mut list_builder, filter);
        let direction = sort.direction.keyword();
        list_builder.push(format!(
            " ORDER BY {} {direction}, id {direction} LIMIT ",
            Self::order_expression(sort.field)
        ));
        list_builder.push_bind(i64::from(page.limit()));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(page.offset());

        let rows = list_builder
            .build_query_as::<NewsRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) AS count FROM news");
        Self::apply_conditions(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((rows_into_news(rows)?, u64::try_from(total).unwrap_or_default()))
    }

    async fn list_related(&self, source: &News, limit: u32) -> DomainResult<Vec<News>> {
        if source.category_id.is_none() && source.tags.is_empty() {
            return Ok(Vec::new());
        }
        let tags = encode_labels(&source.tags)?;

        let rows = sqlx::query_as::<_, NewsRow>(concat!(
            "SELECT ",
            news_columns!(),
            " FROM news WHERE status = 'published' AND id <> ? AND (category_id = ? \
             OR EXISTS (SELECT 1 FROM json_each(news.tags) \
             WHERE json_each.value IN (SELECT value FROM json_each(?)))) \
             ORDER BY published_at DESC, id DESC LIMIT ?"
        ))
        .bind(i64::from(source.id))
        .bind(source.category_id.map(i64::from))
        .bind(tags)
        .bind(i64::from(limit))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows_into_news(rows)
    }
}
