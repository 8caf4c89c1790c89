//! Object storage layer
//!
//! Where the export is written.
//!
//! - `storage` - `ObjectStorage` trait
//! - `s3` - AWS S3 / S3-compatible implementation
//! - `filesystem` - local directory implementation
//! - `error` - error types for storage writes

pub mod error;
pub mod filesystem;
pub mod s3;
pub mod storage;

use std::sync::Arc;

use crate::core::config::{StorageBackend, StorageConfig};

pub use error::StorageError;
pub use filesystem::FilesystemStorage;
pub use s3::S3Storage;
pub use storage::ObjectStorage;

/// Build the configured storage backend
///
/// The returned handle lives for the whole process and is injected into the exporter.
pub async fn init_storage(config: &StorageConfig) -> Result<Arc<dyn ObjectStorage>, StorageError> {
    let storage: Arc<dyn ObjectStorage> = match config.backend {
        StorageBackend::S3 => {
            let s3 = config.s3.as_ref().ok_or_else(|| {
                StorageError::Backend("S3 backend selected but no bucket configured".to_string())
            })?;
            Arc::new(S3Storage::new(s3).await?)
        }
        StorageBackend::Filesystem => {
            Arc::new(FilesystemStorage::new(config.filesystem_path.clone()))
        }
    };

    tracing::debug!(
        backend = storage.name(),
        location = %storage.location(),
        "Storage initialized"
    );

    Ok(storage)
}
