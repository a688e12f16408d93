//! Common error types for taskrota.
//!
//! This crate provides the unified error variants shared by the taskrota
//! crates, so crate-specific error enums stay small and consistent.
//!
//! # Crate-Specific Errors
//!
//! Each crate defines its own error type that wraps [`CommonError`]:
//!
//! ```rust,ignore
//! use taskrota_error::CommonError;
//! use thiserror::Error;
//!
//! #[derive(Debug, Error)]
//! pub enum MyError {
//!     #[error(transparent)]
//!     Common(#[from] CommonError),
//!
//!     #[error("my specific error: {0}")]
//!     Specific(String),
//! }
//! ```

mod common;

pub use common::CommonError;

/// Result type alias using `CommonError`.
pub type Result<T> = std::result::Result<T, CommonError>;
