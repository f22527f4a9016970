use thiserror::Error;

/// Application-wide error types for jobfinder.
#[derive(Error, Debug)]
pub enum AppError {
    /// The identifier or category does not resolve to any stored job.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Talking to the cache failed at the transport level.
    #[error("Cache unavailable: {0}")]
    StoreUnavailable(String),

    /// A cache value exists but has the wrong shape (e.g. a non-integer counter).
    #[error("Corrupt value at '{key}': {message}")]
    CorruptValue { key: String, message: String },

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns true if this error is transient and worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::StoreUnavailable(_))
    }

    /// Returns true for the domain-level "no such job/category" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}
