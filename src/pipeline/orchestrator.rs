use tracing::{error, info};

use super::{dispatcher, puller, purger};
use crate::clients::{ObjectStore, QueueService};
use crate::core::config::DrainConfig;
use crate::core::models::{DrainReport, SinkKind};
use crate::errors::DrainError;

/// Run one pull-transfer-purge cycle: validate the config, pull a batch,
/// dispatch it to every configured sink, and purge the source once every sink
/// delivered. Every error is terminal for the run; there are no retries.
///
/// # Errors
///
/// - `DrainError::Config` if the preconditions fail; no remote call is made.
/// - The first sink error after the join barrier; the purge does not run.
/// - Any pull or purge error.
pub async fn run(
    config: &DrainConfig,
    queue: &dyn QueueService,
    store: &dyn ObjectStore,
) -> Result<DrainReport, DrainError> {
    config.validate()?;

    let batch = puller::pull(queue, &config.source_queue).await?;

    let outcomes = dispatcher::dispatch(&batch, config, queue, store).await;

    // Every launched sink has finished at this point; log all outcomes
    // before failing on the first error so neither result is lost.
    let mut delivered: Vec<SinkKind> = Vec::new();
    let mut first_error: Option<DrainError> = None;
    for (kind, outcome) in outcomes {
        match outcome {
            Ok(()) => delivered.push(kind),
            Err(e) => {
                error!("{} sink delivery failed: {}", kind, e);
                first_error.get_or_insert(e);
            }
        }
    }
    if let Some(e) = first_error {
        return Err(e);
    }

    purger::purge(queue, &config.source_queue, &batch).await?;

    info!(
        "run complete: pulled {}, delivered to {} sink(s), purged {}",
        batch.len(),
        delivered.len(),
        batch.len()
    );
    Ok(DrainReport {
        pulled: batch.len(),
        delivered,
        purged: batch.len(),
    })
}
