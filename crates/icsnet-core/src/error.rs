use thiserror::Error;

/// Result type alias for icsnet core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur at the telemetry ingestion boundary
#[derive(Error, Debug)]
pub enum CoreError {
    /// A scan or log provider failed to produce records
    #[error("provider error: {0}")]
    Provider(String),

    /// String did not match any known port state
    #[error("invalid port state: {0}")]
    InvalidPortState(String),

    /// String did not match any known severity label
    #[error("invalid severity: {0}")]
    InvalidSeverity(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Returns true if the error originated in an external provider
    #[must_use]
    pub const fn is_provider_error(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}
