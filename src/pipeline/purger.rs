use tracing::{debug, info};

use super::MAX_BATCH_ENTRIES;
use crate::clients::{DeleteEntry, QueueService};
use crate::core::models::QueueMessage;
use crate::errors::DrainError;

/// Delete the pulled batch from the source queue, always the whole batch the
/// puller returned. Delivery is not verified per message; the orchestrator
/// only calls this after every sink reported success.
///
/// # Errors
///
/// Returns `DrainError::RemoteService` if a delete call fails or reports
/// per-entry failures.
pub async fn purge(
    queue: &dyn QueueService,
    source: &str,
    batch: &[QueueMessage],
) -> Result<(), DrainError> {
    if batch.is_empty() {
        debug!("empty batch, nothing to purge");
        return Ok(());
    }

    let entries: Vec<DeleteEntry> = batch
        .iter()
        .map(|m| DeleteEntry {
            id: m.id.clone(),
            receipt_handle: m.receipt_handle.clone(),
        })
        .collect();

    for chunk in entries.chunks(MAX_BATCH_ENTRIES) {
        queue.delete_batch(source, chunk).await?;
    }
    info!("purged {} messages from {}", batch.len(), source);
    Ok(())
}
