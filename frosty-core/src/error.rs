use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrostyError {
    #[error("completion endpoint failed: {0}")]
    Completion(String),
    #[error("warehouse query failed: {0}")]
    Warehouse(String),
    #[error("retrieval failed: {0}")]
    Retrieval(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("max retries ({max}) exceeded")]
    MaxRetriesExceeded { max: usize },
    #[error("serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl FrostyError {
    /// Transient transport and provider failures are worth another attempt;
    /// everything else is permanent for the current input.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FrostyError::Completion(_) | FrostyError::Warehouse(_) | FrostyError::Retrieval(_)
        )
    }
}
