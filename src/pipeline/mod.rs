pub mod dispatcher;
pub mod orchestrator;
pub mod puller;
pub mod purger;

/// Largest number of entries SQS accepts in one batch call; also the pull
/// size, so one receive normally maps to one send and one delete call.
pub const MAX_BATCH_ENTRIES: usize = 10;
