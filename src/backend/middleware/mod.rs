//! Middleware Module
//!
//! HTTP middleware applied before requests reach handlers.
//!
//! - **`auth`** - Authentication gate for the blog routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use inkpost::backend::auth::tokens::TokenSettings;
//! use inkpost::backend::middleware::{auth_middleware, AuthUser};
//!
//! let tokens = TokenSettings::new("secret");
//! let protected: Router = Router::new()
//!     .route("/me", get(|AuthUser(id): AuthUser| async move { id.to_string() }))
//!     .route_layer(from_fn_with_state(tokens, auth_middleware));
//! ```

pub mod auth;

pub use auth::{AuthenticatedUser, AuthUser, auth_middleware};
