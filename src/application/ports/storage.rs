// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Raw image received with a news form, not yet persisted.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Persist the upload under `folder` and return its public path.
    async fn save(&self, folder: &str, extension: &str, bytes: Bytes) -> ApplicationResult<String>;
    /// Remove a previously stored file by public path. Missing files are not an error.
    async fn remove(&self, public_path: &str) -> ApplicationResult<()>;
}
