//! Object storage trait definition
//!
//! Defines the interface the exporter writes its output through.

use async_trait::async_trait;

use super::error::StorageError;

/// Trait for object storage backends
///
/// Keys are `/`-separated relative paths such as `data/zendesk_raw_data.json`.
/// Writing an existing key replaces the object.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store an object
    ///
    /// # Arguments
    /// * `key` - Object key inside the bucket/base directory
    /// * `body` - Object bytes
    /// * `content_type` - MIME type recorded with the object where supported
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str)
    -> Result<(), StorageError>;

    /// Human-readable backend name for logs
    fn name(&self) -> &'static str;

    /// Where objects end up (bucket or directory), for logs
    fn location(&self) -> String;
}
