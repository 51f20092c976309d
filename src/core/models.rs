use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DrainError;

/// One message as received from the source queue. The receipt handle is only
/// valid for the receive lease that produced it; the bucket sink persists it
/// anyway because the snapshot captures the batch exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueMessage {
    pub id: String,
    pub body: String,
    pub receipt_handle: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

/// The two sink strategies a run can fan out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Queue,
    Bucket,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Queue => write!(f, "queue"),
            SinkKind::Bucket => write!(f, "bucket"),
        }
    }
}

/// Per-sink delivery result collected at the dispatcher's join barrier.
pub type DeliveryOutcome = Result<(), DrainError>;

/// Summary of a completed run, used for the final log line and by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrainReport {
    pub pulled: usize,
    pub delivered: Vec<SinkKind>,
    pub purged: usize,
}
