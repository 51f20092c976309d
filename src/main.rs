use anyhow::Result;
use clap::{ArgGroup, Parser};
use sqs_shovel::clients::{S3ObjectStore, SqsQueueService};
use sqs_shovel::core::config::DrainConfig;
use sqs_shovel::pipeline::orchestrator;
use tracing::{error, info};

/// Drain one batch of messages from a source SQS queue into a destination
/// queue and/or an S3 bucket, then delete the originals from the source.
#[derive(Debug, Parser)]
#[command(name = "sqs-shovel", version)]
#[command(group(ArgGroup::new("sink").args(["dest", "bucket"]).required(true).multiple(true)))]
struct Cli {
    /// Source queue URL to drain
    #[arg(long)]
    src: String,

    /// Destination queue URL
    #[arg(long)]
    dest: Option<String>,

    /// Destination bucket for the batch snapshot
    #[arg(long)]
    bucket: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    sqs_shovel::setup_logging();

    let cli = Cli::parse();
    let config = DrainConfig {
        source_queue: cli.src,
        dest_queue: cli.dest,
        dest_bucket: cli.bucket,
    };

    info!("source queue : {}", config.source_queue);
    info!(
        "destination queue : {}",
        config.dest_queue.as_deref().unwrap_or("-")
    );
    info!(
        "destination bucket : {}",
        config.dest_bucket.as_deref().unwrap_or("-")
    );

    let shared_config = aws_config::from_env().load().await;
    let queue = SqsQueueService::new(aws_sdk_sqs::Client::new(&shared_config));
    let store = S3ObjectStore::new(aws_sdk_s3::Client::new(&shared_config));

    let result = orchestrator::run(&config, &queue, &store).await;
    if let Err(ref e) = result {
        error!("run failed: {}", e);
    }
    result?;

    info!("all done");
    Ok(())
}
