//! Authentication Handlers Module
//!
//! HTTP handlers for the `/api/v1/user` endpoints.
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/v1/user/signup - create an account, get a token
//! - **`signin`** - POST /api/v1/user/signin - exchange credentials for a token
//!
//! Both answer with the raw token as `text/plain` on success and with
//! `403 Invalid` on any failure.

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

pub use signup::signup;
pub use signin::signin;
