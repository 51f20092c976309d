use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrainError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to interact with AWS services: {0}")]
    RemoteService(String),

    #[error("Failed to serialize message batch: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DrainError {
    fn from(error: serde_json::Error) -> Self {
        DrainError::Serialization(error.to_string())
    }
}
