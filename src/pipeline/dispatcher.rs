use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::MAX_BATCH_ENTRIES;
use crate::clients::{ObjectStore, QueueService, SendEntry};
use crate::core::config::DrainConfig;
use crate::core::models::{DeliveryOutcome, QueueMessage, SinkKind};
use crate::errors::DrainError;

/// Fan the pulled batch out to every configured sink concurrently and collect
/// every outcome at the join barrier. A sink failure never short-circuits the
/// other sink; the caller inspects the outcomes and decides whether to purge.
pub async fn dispatch(
    batch: &[QueueMessage],
    config: &DrainConfig,
    queue: &dyn QueueService,
    store: &dyn ObjectStore,
) -> Vec<(SinkKind, DeliveryOutcome)> {
    let queue_sink = async {
        match config.dest_queue.as_deref().filter(|d| !d.is_empty()) {
            Some(dest) => Some((SinkKind::Queue, deliver_to_queue(batch, dest, queue).await)),
            None => None,
        }
    };
    let bucket_sink = async {
        match config.dest_bucket.as_deref().filter(|b| !b.is_empty()) {
            Some(bucket) => Some((
                SinkKind::Bucket,
                deliver_to_bucket(batch, &config.source_queue, bucket, store).await,
            )),
            None => None,
        }
    };

    let (queue_outcome, bucket_outcome) = futures::join!(queue_sink, bucket_sink);
    queue_outcome.into_iter().chain(bucket_outcome).collect()
}

/// Forward each message to the destination queue, id and body unchanged, in
/// chunks of at most 10 entries per send call.
async fn deliver_to_queue(
    batch: &[QueueMessage],
    dest: &str,
    queue: &dyn QueueService,
) -> Result<(), DrainError> {
    if batch.is_empty() {
        debug!("empty batch, skipping queue sink");
        return Ok(());
    }

    let entries: Vec<SendEntry> = batch
        .iter()
        .map(|m| SendEntry {
            id: m.id.clone(),
            body: m.body.clone(),
        })
        .collect();

    for chunk in entries.chunks(MAX_BATCH_ENTRIES) {
        queue.send_batch(dest, chunk).await?;
    }
    info!("transferred {} messages to queue {}", batch.len(), dest);
    Ok(())
}

/// Store the whole batch as one JSON object, keyed by the source queue and
/// the current UTC time. Runs in the same second against the same source can
/// collide on the key; accepted, not deduplicated.
async fn deliver_to_bucket(
    batch: &[QueueMessage],
    source: &str,
    bucket: &str,
    store: &dyn ObjectStore,
) -> Result<(), DrainError> {
    if batch.is_empty() {
        debug!("empty batch, skipping bucket sink");
        return Ok(());
    }

    let body = serde_json::to_vec(batch)?;
    let key = object_key(source, Utc::now());
    store.put_object(bucket, &key, body).await?;
    info!("transferred {} messages to bucket {} as {}", batch.len(), bucket, key);
    Ok(())
}

fn object_key(source: &str, at: DateTime<Utc>) -> String {
    format!("{source}-{}", at.format("%Y-%m-%d %H:%M:%S UTC"))
}
