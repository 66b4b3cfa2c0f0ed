// src/presentation/http/controllers/public_news.rs
use super::news::{NewsListParams, query_rejection};
use crate::application::{
    commands::news::RecordViewCommand, dto::NewsDto, queries::news::RelatedNewsQuery,
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    openapi::NewsListResponse,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query, rejection::QueryRejection},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RelatedParams {
    /// Defaults to 3, at most 10.
    pub limit: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/public/news",
    params(NewsListParams),
    responses(
        (status = 200, description = "Published news only.", body = NewsListResponse),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Public"
)]
pub async fn list_public_news(
    Extension(state): Extension<HttpState>,
    params: Result<Query<NewsListParams>, QueryRejection>,
) -> HttpResult<Json<NewsListResponse>> {
    let Query(params) = params.map_err(query_rejection)?;
    state
        .services
        .news_queries
        .list_public_news(params.into())
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/public/news/{slug}",
    params(("slug" = String, Path, description = "News slug")),
    responses(
        (status = 200, description = "Published article; its view count is incremented.", body = NewsDto),
        (status = 404, description = "Unknown or unpublished.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Public"
)]
pub async fn get_public_news(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<NewsDto>> {
    state
        .services
        .news_commands
        .record_view(RecordViewCommand { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/public/news/{slug}/related",
    params(("slug" = String, Path, description = "Source article slug"), RelatedParams),
    responses(
        (status = 200, description = "Published articles sharing a category or tag.", body = [NewsDto]),
        (status = 404, description = "Unknown or unpublished source.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Public"
)]
pub async fn related_news(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    params: Result<Query<RelatedParams>, QueryRejection>,
) -> HttpResult<Json<Vec<NewsDto>>> {
    let Query(params) = params.map_err(query_rejection)?;
    state
        .services
        .news_queries
        .related_news(RelatedNewsQuery {
            slug,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}
