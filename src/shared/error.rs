//! Shared Error Types
//!
//! Errors raised while checking request inputs. They are produced by the
//! shared input types and converted into HTTP responses by the backend.
//!
//! # Usage
//!
//! ```rust
//! use inkpost::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title cannot be empty");
//! ```
use thiserror::Error;

/// Errors shared between the backend and clients
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
