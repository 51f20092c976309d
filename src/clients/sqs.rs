use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::types::{DeleteMessageBatchRequestEntry, SendMessageBatchRequestEntry};

use super::{DeleteEntry, QueueService, SendEntry};
use crate::core::models::QueueMessage;
use crate::errors::DrainError;

/// `QueueService` backed by the real SQS API.
#[derive(Debug, Clone)]
pub struct SqsQueueService {
    client: SqsClient,
}

impl SqsQueueService {
    pub fn new(client: SqsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueueService for SqsQueueService {
    async fn receive_batch(
        &self,
        queue: &str,
        max_messages: i32,
    ) -> Result<Vec<QueueMessage>, DrainError> {
        let resp = self
            .client
            .receive_message()
            .queue_url(queue)
            .max_number_of_messages(max_messages)
            .wait_time_seconds(0)
            .message_attribute_names("All")
            .send()
            .await
            .map_err(|e| {
                DrainError::RemoteService(format!("Failed to receive messages from SQS: {e}"))
            })?;

        resp.messages
            .unwrap_or_default()
            .into_iter()
            .map(|m| {
                let id = m.message_id.ok_or_else(|| {
                    DrainError::RemoteService("Received a message without an id".to_string())
                })?;
                let receipt_handle = m.receipt_handle.ok_or_else(|| {
                    DrainError::RemoteService(format!(
                        "Received message {id} without a receipt handle"
                    ))
                })?;
                let attributes = m
                    .message_attributes
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|(name, value)| Some((name, value.string_value?)))
                    .collect();
                Ok(QueueMessage {
                    id,
                    body: m.body.unwrap_or_default(),
                    receipt_handle,
                    attributes,
                })
            })
            .collect()
    }

    async fn send_batch(&self, queue: &str, entries: &[SendEntry]) -> Result<(), DrainError> {
        let mut request = self.client.send_message_batch().queue_url(queue);
        for entry in entries {
            let entry = SendMessageBatchRequestEntry::builder()
                .id(&entry.id)
                .message_body(&entry.body)
                .build()
                .map_err(|e| {
                    DrainError::RemoteService(format!("Failed to build send entry: {e}"))
                })?;
            request = request.entries(entry);
        }

        let resp = request.send().await.map_err(|e| {
            DrainError::RemoteService(format!("Failed to send message batch to SQS: {e}"))
        })?;

        // The batch API reports per-entry failures without erroring; treat
        // them as a sink failure so the purge never runs over lost entries.
        let failed = resp.failed();
        if let Some(failure) = failed.first() {
            return Err(DrainError::RemoteService(format!(
                "{} of {} entries failed to send to {queue}: {}",
                failed.len(),
                entries.len(),
                failure.message().unwrap_or(failure.code()),
            )));
        }
        Ok(())
    }

    async fn delete_batch(&self, queue: &str, entries: &[DeleteEntry]) -> Result<(), DrainError> {
        let mut request = self.client.delete_message_batch().queue_url(queue);
        for entry in entries {
            let entry = DeleteMessageBatchRequestEntry::builder()
                .id(&entry.id)
                .receipt_handle(&entry.receipt_handle)
                .build()
                .map_err(|e| {
                    DrainError::RemoteService(format!("Failed to build delete entry: {e}"))
                })?;
            request = request.entries(entry);
        }

        let resp = request.send().await.map_err(|e| {
            DrainError::RemoteService(format!("Failed to delete message batch from SQS: {e}"))
        })?;

        let failed = resp.failed();
        if let Some(failure) = failed.first() {
            return Err(DrainError::RemoteService(format!(
                "{} of {} entries failed to delete from {queue}: {}",
                failed.len(),
                entries.len(),
                failure.message().unwrap_or(failure.code()),
            )));
        }
        Ok(())
    }
}
