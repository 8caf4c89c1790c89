//! S3-based object storage
//!
//! Writes objects to AWS S3 (or S3-compatible services like MinIO) under the
//! configured bucket, using the key as given.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;

use crate::core::config::S3Config;

use super::error::StorageError;
use super::storage::ObjectStorage;

/// S3-based object storage
#[derive(Debug, Clone)]
pub struct S3Storage {
    /// S3 client, shared for the lifetime of the process
    client: Client,
    /// S3 bucket name
    bucket: String,
}

impl S3Storage {
    /// Create a new S3 storage from the resolved configuration
    pub async fn new(config: &S3Config) -> Result<Self, StorageError> {
        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = config.region.clone() {
            config_loader = config_loader.region(aws_sdk_s3::config::Region::new(region));
        }

        let sdk_config = config_loader.load().await;

        let mut s3_config = aws_sdk_s3::config::Builder::from(&sdk_config);

        if let Some(endpoint_url) = config.endpoint.clone() {
            s3_config = s3_config.endpoint_url(endpoint_url).force_path_style(true); // Required for most S3-compatible services
        }

        let client = Client::from_conf(s3_config.build());

        tracing::debug!(bucket = %config.bucket, "S3 storage initialized");

        Ok(Self::from_client(client, config.bucket.clone()))
    }

    /// Wrap an already-built client
    pub fn from_client(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    fn validate_key(key: &str) -> Result<(), StorageError> {
        if key.is_empty() || key.starts_with('/') {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        Self::validate_key(key)?;

        let size = body.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                StorageError::Backend(format!(
                    "S3 put_object error: {}",
                    e.into_service_error()
                ))
            })?;

        tracing::debug!(bucket = %self.bucket, key, size, "Object stored in S3");

        Ok(())
    }

    fn name(&self) -> &'static str {
        "s3"
    }

    fn location(&self) -> String {
        format!("s3://{}", self.bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
    use httpmock::prelude::*;

    fn mock_storage(server: &MockServer, bucket: &str) -> S3Storage {
        let conf = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
            .endpoint_url(server.base_url())
            .force_path_style(true)
            .build();
        S3Storage::from_client(Client::from_conf(conf), bucket.to_string())
    }

    #[test]
    fn test_validate_key_valid() {
        assert!(S3Storage::validate_key("data/zendesk_raw_data.json").is_ok());
    }

    #[test]
    fn test_validate_key_invalid() {
        assert!(matches!(
            S3Storage::validate_key(""),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            S3Storage::validate_key("/data/x.json"),
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_location() {
        let conf = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        let storage = S3Storage::from_client(Client::from_conf(conf), "metrics".to_string());
        assert_eq!(storage.location(), "s3://metrics");
        assert_eq!(storage.name(), "s3");
    }

    #[tokio::test]
    async fn test_put_sends_key_and_content_type() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/metrics/data/zendesk_raw_data.json")
                    .header("content-type", "application/json");
                then.status(200);
            })
            .await;

        let storage = mock_storage(&server, "metrics");
        storage
            .put(
                "data/zendesk_raw_data.json",
                br#"{"rows":[]}"#.to_vec(),
                "application/json",
            )
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_put_rejected_maps_to_backend_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/metrics/data/zendesk_data_tables.json");
                then.status(403)
                    .header("content-type", "application/xml")
                    .body("<Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>");
            })
            .await;

        let storage = mock_storage(&server, "metrics");
        let err = storage
            .put("data/zendesk_data_tables.json", b"{}".to_vec(), "application/json")
            .await
            .unwrap_err();

        match err {
            StorageError::Backend(message) => assert!(message.starts_with("S3 put_object error")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
