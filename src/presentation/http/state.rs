// src/presentation/http/state.rs
use crate::{application::services::ApplicationServices, config::AppConfig};
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub settings: Arc<HttpSettings>,
}

/// Transport-level knobs that never reach the application layer.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// CORS origins; `*` allows any origin.
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub uploads_dir: PathBuf,
    pub rate_limit: bool,
}

impl HttpSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            max_upload_bytes: config.max_upload_bytes(),
            uploads_dir: config.uploads_dir().clone(),
            rate_limit: config.rate_limit_enabled(),
        }
    }
}
