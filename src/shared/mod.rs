//! Shared Module
//!
//! This module contains the wire types shared between the server and any
//! client of the blog API. Request inputs, response views and identifiers
//! live here so that a client crate can depend on them without pulling in
//! the server stack.
//!
//! # Overview
//!
//! - **`user`** - user identifiers and the signup/signin inputs
//! - **`blog`** - post identifiers, post inputs and the post views returned
//!   by the list/get endpoints
//! - **`error`** - input validation errors

/// User identifiers and credential inputs
pub mod user;

/// Blog post inputs and views
pub mod blog;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use user::{UserId, SignupInput, SigninInput};
pub use blog::{
    PostId, CreatePostInput, UpdatePostInput, PostView, AuthorView,
    PostIdResponse, PostListResponse, PostResponse,
};
pub use error::SharedError;
