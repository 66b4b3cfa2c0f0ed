// tests/support/mocks/storage.rs
use bytes::Bytes;
use npc_newsroom::application::{ApplicationResult, ports::storage::ImageStorage};
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Keeps track of stored and removed paths instead of touching the disk.
#[derive(Default)]
pub struct RecordingImageStorage {
    counter: AtomicUsize,
    saved: Mutex<Vec<String>>,
    removed: Mutex<Vec<String>>,
}

impl RecordingImageStorage {
    pub fn saved(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }

    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ImageStorage for RecordingImageStorage {
    async fn save(&self, folder: &str, extension: &str, _bytes: Bytes) -> ApplicationResult<String> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let path = format!("/uploads/{folder}/image-{n}.{extension}");
        self.saved.lock().unwrap().push(path.clone());
        Ok(path)
    }

    async fn remove(&self, public_path: &str) -> ApplicationResult<()> {
        self.removed.lock().unwrap().push(public_path.to_string());
        Ok(())
    }
}
