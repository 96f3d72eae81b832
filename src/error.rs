use thiserror::Error;

/// Unified error type for release-outputs operations
#[derive(Error, Debug)]
pub enum ReleaseOutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema parse error: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in release-outputs
pub type Result<T> = std::result::Result<T, ReleaseOutputError>;

impl ReleaseOutputError {
    /// Create an environment error with context
    pub fn environment(msg: impl Into<String>) -> Self {
        ReleaseOutputError::Environment(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseOutputError::Config(msg.into())
    }
}
