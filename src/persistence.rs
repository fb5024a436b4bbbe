//! Persistence
//!
//! Where terminal state blobs live between sessions. The terminal itself
//! never touches storage; callers load a blob, hand it to
//! [`crate::terminal::Terminal::import_state`] and save what
//! `export_state` returns.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("snapshot store {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Storage for one serialized terminal state.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// The saved blob, or `None` if nothing was saved yet.
    async fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the saved blob.
    async fn save(&self, blob: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    blob: RwLock<Option<String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.blob.read().await.clone())
    }

    async fn save(&self, blob: &str) -> Result<(), StoreError> {
        *self.blob.write().await = Some(blob.to_string());
        Ok(())
    }
}

/// Keeps the blob in a single file on the host.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    async fn save(&self, blob: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }
        // write beside the target and rename so a crash never leaves half a blob
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, blob).await.map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), bytes = blob.len(), "state saved");
        Ok(())
    }
}
