//! Error types for the core layer.

use taskrota_error::CommonError;
use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Common errors (I/O, config, not found).
    #[error(transparent)]
    Common(#[from] CommonError),

    /// A rule target carried a task override payload that does not conform
    /// to the task override schema. Aborts the whole synchronization pass;
    /// no partial document is produced.
    #[error("invalid task override payload on rule {rule}: {source}")]
    OverrideDecode {
        /// Name of the rule whose target carried the payload.
        rule: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration document serialization or parse error.
    #[error("configuration document error: {0}")]
    Document(#[from] serde_yaml::Error),
}

impl CoreError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Common(CommonError::config(msg))
    }

    /// Creates a new not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::Common(CommonError::not_found(resource))
    }
}

// Allow automatic conversion from std::io::Error to CoreError via CommonError.
impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Common(CommonError::from(err))
    }
}
