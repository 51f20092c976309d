use async_trait::async_trait;

use crate::core::models::QueueMessage;
use crate::errors::DrainError;

mod s3;
mod sqs;

pub use s3::S3ObjectStore;
pub use sqs::SqsQueueService;

/// One entry of a queue-sink send call; id and body are carried over from the
/// pulled message unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEntry {
    pub id: String,
    pub body: String,
}

/// One entry of a purge call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEntry {
    pub id: String,
    pub receipt_handle: String,
}

/// Queue operations the pipeline consumes. Implemented over aws-sdk-sqs in
/// production and by recording fakes in tests.
#[async_trait]
pub trait QueueService: Send + Sync {
    async fn receive_batch(
        &self,
        queue: &str,
        max_messages: i32,
    ) -> Result<Vec<QueueMessage>, DrainError>;

    async fn send_batch(&self, queue: &str, entries: &[SendEntry]) -> Result<(), DrainError>;

    async fn delete_batch(&self, queue: &str, entries: &[DeleteEntry]) -> Result<(), DrainError>;
}

/// Object storage operations the bucket sink consumes.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), DrainError>;
}
