use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::ImageStorage,
};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

/// Stores uploaded images on the local filesystem.
///
/// Files land under `root/<folder>/<uuid>.<ext>` and are addressed publicly as
/// `<public_prefix>/<folder>/<uuid>.<ext>`.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalImageStorage {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a public path back onto the filesystem, refusing anything that
    /// escapes the storage root.
    fn resolve(&self, public_path: &str) -> ApplicationResult<PathBuf> {
        let relative = public_path
            .strip_prefix(&self.public_prefix)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(|| {
                ApplicationError::validation(format!("not a stored image path: {public_path}"))
            })?;

        let relative = Path::new(relative);
        if relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return Err(ApplicationError::validation(format!(
                "not a stored image path: {public_path}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

fn io_error(err: std::io::Error) -> ApplicationError {
    ApplicationError::infrastructure(format!("image storage: {err}"))
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn save(&self, folder: &str, extension: &str, bytes: Bytes) -> ApplicationResult<String> {
        let dir = self.root.join(folder);
        fs::create_dir_all(&dir).await.map_err(io_error)?;

        let file_name = format!("{}.{extension}", Uuid::new_v4());
        let mut file = fs::File::create(dir.join(&file_name))
            .await
            .map_err(io_error)?;
        file.write_all(&bytes).await.map_err(io_error)?;
        file.flush().await.map_err(io_error)?;

        tracing::debug!(folder, file = %file_name, size = bytes.len(), "image stored");
        Ok(format!("{}/{folder}/{file_name}", self.public_prefix))
    }

    async fn remove(&self, public_path: &str) -> ApplicationResult<()> {
        let path = self.resolve(public_path)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(err)),
        }
    }
}
