//! Filesystem-based object storage
//!
//! Writes objects below a base directory: `{base_path}/{key}`. Used for local
//! dry runs of the export.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::utils::file::key_to_path;

use super::error::StorageError;
use super::storage::ObjectStorage;

/// Filesystem-based object storage
#[derive(Debug, Clone)]
pub struct FilesystemStorage {
    /// Base path for written objects
    base_path: PathBuf,
}

impl FilesystemStorage {
    /// Create a new filesystem storage with the given base path
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn object_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        key_to_path(&self.base_path, key).ok_or_else(|| StorageError::InvalidKey(key.to_string()))
    }
}

#[async_trait]
impl ObjectStorage for FilesystemStorage {
    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        let path = self.object_path(key)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Write to a sibling temp file and rename so readers never see a partial object
        let temp_path = path.with_extension("json.tmp");
        let size = body.len();
        fs::write(&temp_path, body).await?;
        if let Err(e) = fs::rename(&temp_path, &path).await {
            fs::remove_file(&temp_path).await.ok();
            return Err(StorageError::Io(e));
        }

        tracing::debug!(key, size, path = %path.display(), "Object stored on filesystem");

        Ok(())
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }

    fn location(&self) -> String {
        self.base_path.display().to_string()
    }
}
