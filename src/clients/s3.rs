use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;

use super::ObjectStore;
use crate::errors::DrainError;

/// `ObjectStore` backed by the real S3 API.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: S3Client,
}

impl S3ObjectStore {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), DrainError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                DrainError::RemoteService(format!("Failed to put object to S3: {e}"))
            })?;
        Ok(())
    }
}
