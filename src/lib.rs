/// sqs-shovel - drains one bounded batch of messages from a source SQS queue,
/// fans it out to a destination queue and/or an S3 bucket, then deletes the
/// originals from the source once every configured sink has delivered.
///
/// # Architecture
///
/// One linear pipeline per invocation, no persistent state:
/// 1. The puller issues a single non-blocking receive for up to 10 messages.
/// 2. The dispatcher forwards the batch to every configured sink concurrently
///    and joins both outcomes before anything else happens.
/// 3. The purger deletes the pulled batch from the source, but only when no
///    sink reported a failure.
///
/// The system uses:
/// - aws-sdk-sqs / aws-sdk-s3 behind small service traits so the pipeline is
///   testable with injected fakes
/// - Tokio for the async runtime
/// - clap for flag parsing in the binary
///
/// # Example
///
/// ```no_run
/// use sqs_shovel::core::config::DrainConfig;
/// use sqs_shovel::clients::{S3ObjectStore, SqsQueueService};
/// use sqs_shovel::pipeline::orchestrator;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     sqs_shovel::setup_logging();
///
///     let config = DrainConfig {
///         source_queue: "https://sqs.us-east-1.amazonaws.com/123/inbox".to_string(),
///         dest_queue: Some("https://sqs.us-east-1.amazonaws.com/123/outbox".to_string()),
///         dest_bucket: None,
///     };
///
///     let shared_config = aws_config::from_env().load().await;
///     let queue = SqsQueueService::new(aws_sdk_sqs::Client::new(&shared_config));
///     let store = S3ObjectStore::new(aws_sdk_s3::Client::new(&shared_config));
///
///     let report = orchestrator::run(&config, &queue, &store).await?;
///     println!("pulled {} messages", report.pulled);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod pipeline;

pub use errors::DrainError;

/// Configure structured logging for the CLI.
///
/// Sets up tracing-subscriber with an `EnvFilter` so `RUST_LOG` controls
/// verbosity; defaults to `info` when the variable is unset. Call once at
/// process start.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
