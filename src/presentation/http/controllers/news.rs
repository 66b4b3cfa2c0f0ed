// src/presentation/http/controllers/news.rs
use super::parse_id;
use crate::application::{
    commands::news::{
        BulkNewsCommand, CreateNewsCommand, DeleteNewsCommand, PublishNewsCommand,
        UpdateNewsCommand,
    },
    dto::{BulkOutcomeDto, NewsDto},
    queries::news::{GetNewsByIdQuery, GetNewsBySlugQuery, ListNewsQuery},
};
use crate::presentation::http::{
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::AdminAuthenticated,
    multipart::read_news_form,
    openapi::NewsListResponse,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{
        Multipart, Path, Query,
        multipart::MultipartRejection,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Listing filters. Every value is taken verbatim and validated by the
/// query service so bad input produces a 400 with a readable message.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NewsListParams {
    /// Substring matched against title, excerpt and content.
    pub search: Option<String>,
    /// `draft`, `published` or `archived`. Ignored on public listings.
    pub status: Option<String>,
    #[serde(alias = "category_id")]
    pub category_id: Option<String>,
    /// Comma separated; matches articles carrying any of them.
    pub classifications: Option<String>,
    /// Comma separated; matches articles carrying any of them.
    pub tags: Option<String>,
    #[serde(alias = "date_from")]
    pub date_from: Option<String>,
    #[serde(alias = "date_to")]
    pub date_to: Option<String>,
    pub featured: Option<String>,
    pub breaking: Option<String>,
    /// `createdAt`, `updatedAt`, `publishedAt`, `title` or `viewCount`.
    #[serde(alias = "sort_by")]
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    #[serde(alias = "sort_order")]
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl From<NewsListParams> for ListNewsQuery {
    fn from(params: NewsListParams) -> Self {
        Self {
            search: params.search,
            status: params.status,
            category_id: params.category_id,
            classifications: params.classifications,
            tags: params.tags,
            date_from: params.date_from,
            date_to: params.date_to,
            featured: params.featured,
            breaking: params.breaking,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
            page: params.page,
            limit: params.limit,
        }
    }
}

/// Multipart news form as documented; the handler reads it field by field.
#[allow(dead_code)]
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsFormSchema {
    title: Option<String>,
    slug: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    category_id: Option<String>,
    status: Option<String>,
    /// JSON array of strings.
    tags: Option<String>,
    /// JSON array of strings.
    classifications: Option<String>,
    /// JSON object.
    metadata: Option<String>,
    is_featured: Option<String>,
    is_breaking: Option<String>,
    published_at: Option<String>,
    /// Update only.
    remove_image: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    image: Option<Vec<u8>>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct BulkNewsRequest {
    /// `updateStatus` or `delete`.
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    #[schema(value_type = Vec<i64>)]
    pub ids: serde_json::Value,
    pub status: Option<String>,
}

pub(crate) fn json_rejection(rejection: JsonRejection) -> HttpError {
    HttpError::new(StatusCode::BAD_REQUEST, rejection.body_text())
}

pub(crate) fn query_rejection(rejection: QueryRejection) -> HttpError {
    HttpError::new(StatusCode::BAD_REQUEST, rejection.body_text())
}

#[utoipa::path(
    get,
    path = "/api/news",
    params(NewsListParams),
    responses(
        (status = 200, description = "Filtered page of news in any status.", body = NewsListResponse),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    params: Result<Query<NewsListParams>, QueryRejection>,
) -> HttpResult<Json<NewsListResponse>> {
    let Query(params) = params.map_err(query_rejection)?;
    state
        .services
        .news_queries
        .list_news(params.into())
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/api/news",
    request_body(content = NewsFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "News created.", body = NewsDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse),
        (status = 413, description = "Image too large.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn create_news(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    multipart: Result<Multipart, MultipartRejection>,
) -> HttpResult<(StatusCode, Json<NewsDto>)> {
    let form = read_news_form(multipart, state.settings.max_upload_bytes).await?;
    let command = CreateNewsCommand {
        fields: form.fields,
        image: form.image,
    };

    let created = state
        .services
        .news_commands
        .create_news(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(("id" = i64, Path, description = "News id")),
    responses(
        (status = 200, description = "News article.", body = NewsDto),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn get_news(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<NewsDto>> {
    let id = parse_id(&id)?;
    state
        .services
        .news_queries
        .get_news_by_id(GetNewsByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/news/slug/{slug}",
    params(("slug" = String, Path, description = "News slug")),
    responses(
        (status = 200, description = "News article in any status.", body = NewsDto),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn get_news_by_slug(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<NewsDto>> {
    state
        .services
        .news_queries
        .get_news_by_slug(GetNewsBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/news/{id}",
    params(("id" = i64, Path, description = "News id")),
    request_body(content = NewsFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "News updated.", body = NewsDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn update_news(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> HttpResult<Json<NewsDto>> {
    let id = parse_id(&id)?;
    let form = read_news_form(multipart, state.settings.max_upload_bytes).await?;
    let command = UpdateNewsCommand {
        id,
        fields: form.fields,
        image: form.image,
        remove_image: form.remove_image,
    };

    state
        .services
        .news_commands
        .update_news(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    params(("id" = i64, Path, description = "News id")),
    responses(
        (status = 204, description = "News and its image removed."),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn delete_news(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = parse_id(&id)?;
    state
        .services
        .news_commands
        .delete_news(DeleteNewsCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/news/{id}/publish",
    params(("id" = i64, Path, description = "News id")),
    responses(
        (status = 200, description = "News published.", body = NewsDto),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn publish_news(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<NewsDto>> {
    let id = parse_id(&id)?;
    state
        .services
        .news_commands
        .publish_news(PublishNewsCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/news/bulk",
    request_body = BulkNewsRequest,
    responses(
        (status = 200, description = "Bulk action applied.", body = BulkOutcomeDto),
        (status = 400, description = "Invalid action, ids or status.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn bulk_news(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    payload: Result<Json<BulkNewsRequest>, JsonRejection>,
) -> HttpResult<Json<BulkOutcomeDto>> {
    let Json(payload) = payload.map_err(json_rejection)?;
    let command = BulkNewsCommand {
        action: payload.action,
        ids: payload.ids,
        status: payload.status,
    };

    state
        .services
        .news_commands
        .bulk_news(command)
        .await
        .into_http()
        .map(Json)
}
