//! Backend Error Module
//!
//! Error types returned by HTTP handlers and their conversion into
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and the fixed client messages
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use inkpost::backend::error::ApiError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<serde_json::Value>, ApiError> {
//!     Err(ApiError::NotLoggedIn)
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
