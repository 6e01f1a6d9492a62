//! Backend Module
//!
//! This module contains all server-side code: the Axum HTTP server, the
//! authentication gate, the user and blog handlers and persistence.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Token issuance/verification, credentials, signup/signin
//! - **`middleware`** - Authentication gate for the blog routes
//! - **`blog`** - Create/update/list/get post handlers
//! - **`store`** - Users and posts (PostgreSQL or in-memory)
//! - **`error`** - Handler error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Tokens, credentials, user handlers
//! ├── middleware/     - Authentication gate
//! ├── blog/           - Blog post handlers
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! HTTP request → authentication gate (blog routes only) → handler →
//! store → JSON or text response.
//!
//! # State Management
//!
//! `AppState` holds the store handle, token settings and the bcrypt cost.
//! It is read-only after startup; requests share nothing else.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. Each `ApiError` variant maps to
//! one status code and one fixed body, and internal causes are only logged.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Blog post handlers
pub mod blog;

/// Persistence for users and posts
pub mod store;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use error::ApiError;
pub use store::{BlogStore, MemoryStore, PgStore};
