// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::{categories, news, public_news},
    middleware::rate_limit::public_rate_limit_layer,
    openapi::{self, StatusResponse},
    state::{HttpSettings, HttpState},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{delete, get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Room for the text fields and multipart framing around an image.
const FORM_OVERHEAD_BYTES: usize = 256 * 1024;

pub fn build_router(state: HttpState) -> Router {
    let settings = state.settings.clone();

    let admin = Router::new()
        .route("/api/news", get(news::list_news).post(news::create_news))
        .route("/api/news/bulk", post(news::bulk_news))
        .route("/api/news/slug/{slug}", get(news::get_news_by_slug))
        .route(
            "/api/news/{id}",
            get(news::get_news)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .route("/api/news/{id}/publish", post(news::publish_news))
        .route("/api/categories", post(categories::create_category))
        .route("/api/categories/{id}", delete(categories::delete_category));

    let mut public = Router::new()
        .route("/api/public/news", get(public_news::list_public_news))
        .route("/api/public/news/{slug}", get(public_news::get_public_news))
        .route(
            "/api/public/news/{slug}/related",
            get(public_news::related_news),
        )
        .route("/api/categories", get(categories::list_categories));
    if settings.rate_limit {
        match public_rate_limit_layer() {
            Some(layer) => public = public.layer(layer),
            None => tracing::warn!("rate limiter misconfigured; public routes are unthrottled"),
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(admin)
        .merge(public)
        .nest_service("/uploads", ServeDir::new(&settings.uploads_dir))
        .layer(DefaultBodyLimit::max(
            settings.max_upload_bytes.saturating_add(FORM_OVERHEAD_BYTES),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&settings))
        .layer(Extension(state))
}

fn cors_layer(settings: &HttpSettings) -> CorsLayer {
    let origins = if settings.allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = settings
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
