//! Inkpost - Blog Publishing Backend
//!
//! A small blog backend: users sign up or sign in to receive a signed
//! token, and use it as a bearer token to create, update, list and read
//! posts.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types usable by any client
//!   - User and post identifiers
//!   - Request inputs and their validation
//!   - Response views
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and routes
//!   - JWT issuance and the authentication gate
//!   - PostgreSQL and in-memory stores
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Server code and its dependencies. Disable it to
//!   use only the `shared` types from a client.
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpost::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Endpoints
//!
//! | Method | Path                    | Auth   |
//! |--------|-------------------------|--------|
//! | POST   | `/api/v1/user/signup`   | none   |
//! | POST   | `/api/v1/user/signin`   | none   |
//! | POST   | `/api/v1/blog`          | bearer |
//! | PUT    | `/api/v1/blog`          | bearer |
//! | GET    | `/api/v1/blog/bulk`     | bearer |
//! | GET    | `/api/v1/blog/{id}`     | bearer |

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
