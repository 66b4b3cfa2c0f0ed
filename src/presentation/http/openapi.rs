// src/presentation/http/openapi.rs
use crate::application::dto::{NewsDto, Page, PageMeta};
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewsListResponse {
    pub items: Vec<NewsDto>,
    pub pagination: PageMeta,
}

impl From<Page<NewsDto>> for NewsListResponse {
    fn from(page: Page<NewsDto>) -> Self {
        Self {
            items: page.items,
            pagination: page.pagination,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::news::list_news,
        crate::presentation::http::controllers::news::create_news,
        crate::presentation::http::controllers::news::get_news,
        crate::presentation::http::controllers::news::get_news_by_slug,
        crate::presentation::http::controllers::news::update_news,
        crate::presentation::http::controllers::news::delete_news,
        crate::presentation::http::controllers::news::publish_news,
        crate::presentation::http::controllers::news::bulk_news,
        crate::presentation::http::controllers::public_news::list_public_news,
        crate::presentation::http::controllers::public_news::get_public_news,
        crate::presentation::http::controllers::public_news::related_news,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::delete_category,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            NewsListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::news::NewsFormSchema,
            crate::presentation::http::controllers::news::BulkNewsRequest,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::application::dto::NewsDto,
            crate::application::dto::PageMeta,
            crate::application::dto::BulkOutcomeDto,
            crate::application::dto::CategoryDto,
            crate::domain::news::NewsStatus
        )
    ),
    tags(
        (name = "News", description = "Newsroom administration"),
        (name = "Public", description = "Published news for readers"),
        (name = "Categories", description = "News categories"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "NPC Newsroom API",
        description = "News publishing backend for a National Paralympic Committee",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.description = Some("Value of ADMIN_API_TOKEN".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(redoc)
}

pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    let doc = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
