//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - User and blog route tables
//! ```
//!
//! # Route Types
//!
//! ## User Routes (public)
//!
//! - `POST /api/v1/user/signup`
//! - `POST /api/v1/user/signin`
//!
//! ## Blog Routes (authentication gate)
//!
//! - `POST /api/v1/blog`, `PUT /api/v1/blog`
//! - `GET /api/v1/blog/bulk`
//! - `GET /api/v1/blog/{id}`

/// Main router creation
pub mod router;

/// User and blog route tables
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
