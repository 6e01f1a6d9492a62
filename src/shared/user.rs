/**
 * User Types
 *
 * Identifiers and request bodies for the `/api/v1/user` endpoints.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique reference to a user account
///
/// Assigned by the store when the user signs up and never changed afterwards.
/// This is the identity carried inside issued tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupInput {
    /// Login name, unique across users
    pub username: String,
    /// Plain-text password (hashed before storage)
    pub password: String,
    /// Display name shown as the author of posts
    #[serde(default)]
    pub name: Option<String>,
}

/// Sign in request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SigninInput {
    pub username: String,
    pub password: String,
}
