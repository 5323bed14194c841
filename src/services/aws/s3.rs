//! S3 artifact uploads

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::Result;
use crate::error::InventoryError;
use crate::services::ArtifactStore;

/// `ArtifactStore` backed by S3
#[derive(Debug, Clone)]
pub struct S3ArtifactStore {
    client: Client,
}

impl S3ArtifactStore {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl ArtifactStore for S3ArtifactStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| InventoryError::ArtifactWrite {
                key: format!("s3://{}/{}", bucket, key),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }
}
