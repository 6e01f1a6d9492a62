//! Blog Module
//!
//! Handlers for the `/api/v1/blog` endpoints. All of them sit behind the
//! authentication gate; create and update use the caller's identity as
//! the post author.
//!
//! # Endpoints
//!
//! - `POST /api/v1/blog` - create a post
//! - `PUT /api/v1/blog` - update one of your posts
//! - `GET /api/v1/blog/bulk` - list all posts
//! - `GET /api/v1/blog/{id}` - fetch one post

/// HTTP handlers for blog posts
pub mod handlers;

pub use handlers::{create_post, get_post, list_posts, update_post};
