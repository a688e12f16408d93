//! Common error types shared across taskrota crates.

use thiserror::Error;

/// Common errors that occur across multiple taskrota crates.
///
/// Crate-specific errors wrap this type using the `#[from]` attribute.
#[derive(Debug, Error)]
pub enum CommonError {
    /// I/O error from the standard library.
    ///
    /// Wraps `std::io::Error` for configuration file reads and other
    /// filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    ///
    /// Indicates missing or invalid configuration values, such as an
    /// unresolved region or cluster.
    #[error("configuration error: {0}")]
    Config(String),

    /// Resource not found.
    ///
    /// Used when a requested resource (rule, cluster, configuration file)
    /// does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal error.
    ///
    /// A catch-all for unexpected internal errors. Should include enough
    /// context for debugging.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CommonError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a new not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Creates a new internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is an I/O error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
