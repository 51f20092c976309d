use tracing::info;

use super::MAX_BATCH_ENTRIES;
use crate::clients::QueueService;
use crate::core::models::QueueMessage;
use crate::errors::DrainError;

/// Pull one batch from the source queue: a single non-blocking receive for up
/// to 10 messages with all message attributes. An empty result is a normal
/// outcome, not an error.
///
/// # Errors
///
/// Returns `DrainError::RemoteService` if the receive call fails; the caller
/// aborts the whole run.
pub async fn pull(
    queue: &dyn QueueService,
    source: &str,
) -> Result<Vec<QueueMessage>, DrainError> {
    let batch = queue
        .receive_batch(source, MAX_BATCH_ENTRIES as i32)
        .await?;
    info!("received {} messages from {}", batch.len(), source);
    Ok(batch)
}
