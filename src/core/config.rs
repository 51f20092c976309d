use crate::errors::DrainError;

/// Resolved run configuration. A run needs a source queue and at least one
/// sink; everything else (credentials, region) comes from the ambient AWS
/// config chain loaded by the binary.
#[derive(Debug, Clone)]
pub struct DrainConfig {
    pub source_queue: String,
    pub dest_queue: Option<String>,
    pub dest_bucket: Option<String>,
}

impl DrainConfig {
    /// # Errors
    ///
    /// Returns `DrainError::Config` if the source queue is empty or no sink
    /// is configured. Checked before any remote call is made.
    pub fn validate(&self) -> Result<(), DrainError> {
        if self.source_queue.is_empty() {
            return Err(DrainError::Config("source queue must not be empty".to_string()));
        }
        let no_queue = self.dest_queue.as_deref().unwrap_or("").is_empty();
        let no_bucket = self.dest_bucket.as_deref().unwrap_or("").is_empty();
        if no_queue && no_bucket {
            return Err(DrainError::Config(
                "at least one of destination queue or destination bucket is required".to_string(),
            ));
        }
        Ok(())
    }
}
