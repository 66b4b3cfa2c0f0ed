// src/presentation/http/controllers/categories.rs
use super::{news::json_rejection, parse_id};
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand},
    dto::CategoryDto,
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::AdminAuthenticated,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories ordered by name.", body = [CategoryDto])
    ),
    security(()),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Invalid name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Category already exists.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let Json(payload) = payload.map_err(json_rejection)?;
    let created = state
        .services
        .category_commands
        .create_category(CreateCategoryCommand { name: payload.name })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category removed; its articles become uncategorised."),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    AdminAuthenticated(_admin): AdminAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = parse_id(&id)?;
    state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
