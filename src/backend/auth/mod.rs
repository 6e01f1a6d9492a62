//! Authentication Module
//!
//! Token issuance, credential handling and the signup/signin endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── tokens.rs       - JWT issuance and verification
//! ├── users.rs        - Account creation and credential matching
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs
//!     ├── signup.rs
//!     └── signin.rs
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username, password, name → user created → token returned
//! 2. **Signin**: username, password → credentials matched → token returned
//! 3. **Blog routes**: bearer token → verified by the gate in
//!    `backend::middleware::auth` → identity attached to the request
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are HS256 JWTs signed with the configured secret
//! - Tokens do not expire unless `JWT_TTL_SECS` is set
//! - Every credential failure returns the same `403 Invalid`

/// JWT token generation and validation
pub mod tokens;

/// Account creation and credential matching
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{signin, signup};
pub use tokens::{issue_token, verify_token, TokenError, TokenSettings};
