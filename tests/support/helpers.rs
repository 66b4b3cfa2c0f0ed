// tests/support/helpers.rs
use super::mocks::{FixedClock, RecordingImageStorage};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use npc_newsroom::{
    application::{
        ports::{
            security::AdminTokenVerifier, storage::ImageStorage, time::Clock,
            util::SlugGenerator,
        },
        services::ApplicationServices,
    },
    domain::{
        category::CategoryRepository,
        news::{NewsReadRepository, NewsWriteRepository},
    },
    infrastructure::{
        database,
        repositories::{
            SqliteCategoryRepository, SqliteNewsReadRepository, SqliteNewsWriteRepository,
        },
        security::StaticAdminTokenVerifier,
        util::DefaultSlugGenerator,
    },
    presentation::http::{
        routes::build_router,
        state::{HttpSettings, HttpState},
    },
};
use serde_json::Value;
use sqlx::SqlitePool;
use std::{path::PathBuf, sync::Arc};
use tower::util::ServiceExt as _;

pub const ADMIN_TOKEN: &str = "test-admin-token-0001";
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024;

pub struct TestApp {
    pub router: Router,
    pub storage: Arc<RecordingImageStorage>,
    pub pool: Arc<SqlitePool>,
}

pub async fn memory_pool() -> Arc<SqlitePool> {
    let pool = database::init_memory_pool().await.expect("memory pool");
    database::run_migrations(&pool).await.expect("migrations");
    Arc::new(pool)
}

/// Real SQLite repositories over an in-memory database with an optional
/// replacement for the write repository.
pub fn build_services(
    pool: &Arc<SqlitePool>,
    storage: Arc<RecordingImageStorage>,
    write_override: Option<Arc<dyn NewsWriteRepository>>,
) -> Arc<ApplicationServices> {
    let write: Arc<dyn NewsWriteRepository> = write_override
        .unwrap_or_else(|| Arc::new(SqliteNewsWriteRepository::new(Arc::clone(pool))));
    let read: Arc<dyn NewsReadRepository> =
        Arc::new(SqliteNewsReadRepository::new(Arc::clone(pool)));
    let categories: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(Arc::clone(pool)));
    let images: Arc<dyn ImageStorage> = storage;
    let verifier: Arc<dyn AdminTokenVerifier> = Arc::new(StaticAdminTokenVerifier::new(ADMIN_TOKEN));
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    Arc::new(ApplicationServices::new(
        write, read, categories, images, verifier, clock, slugger,
    ))
}

pub fn test_settings() -> HttpSettings {
    HttpSettings {
        allowed_origins: vec!["*".into()],
        max_upload_bytes: MAX_UPLOAD_BYTES,
        uploads_dir: PathBuf::from("target/test-uploads"),
        rate_limit: false,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_settings()).await
}

pub async fn spawn_app_with(settings: HttpSettings) -> TestApp {
    let pool = memory_pool().await;
    let storage = Arc::new(RecordingImageStorage::default());
    let services = build_services(&pool, Arc::clone(&storage), None);
    let state = HttpState {
        services,
        settings: Arc::new(settings),
    };
    TestApp {
        router: build_router(state),
        storage,
        pool,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Send and decode the JSON body; an empty body decodes to `Value::Null`.
    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.send(request).await;
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), 4 * 1024 * 1024)
            .await
            .unwrap();
        if bytes.is_empty() {
            return (status, Value::Null);
        }
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    /// Create an article through the admin API and return its JSON.
    pub async fn create_news(&self, form: super::builders::NewsForm) -> Value {
        let (status, body) = self.send_json(form.into_request(Method::POST, "/api/news")).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body
    }

    pub async fn create_category(&self, name: &str) -> Value {
        let request = admin_request(Method::POST, "/api/categories")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::json!({ "name": name }).to_string()))
            .unwrap();
        let (status, body) = self.send_json(request).await;
        assert_eq!(status, StatusCode::CREATED, "category create failed: {body}");
        body
    }
}

pub fn admin_request(method: Method, uri: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"))
}

pub fn admin_get(uri: &str) -> Request<Body> {
    admin_request(Method::GET, uri).body(Body::empty()).unwrap()
}

pub fn public_get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn admin_json(method: Method, uri: &str, payload: Value) -> Request<Body> {
    admin_request(method, uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

/// Assert that a response carries the expected status and `{ "error": <message> }` body.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
}

/// Assert only the status and that an `error` string is present.
pub async fn assert_error_status(resp: Response, expected_status: StatusCode) -> String {
    assert_eq!(resp.status(), expected_status);
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.expect("read body");
    let json: Value = serde_json::from_slice(&bytes).expect("json error body");
    let message = json
        .get("error")
        .and_then(Value::as_str)
        .expect("error field")
        .to_string();
    assert!(!message.is_empty());
    message
}
