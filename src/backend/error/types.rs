/**
 * API Error Types
 *
 * Every failure a handler can report, each tied to one fixed status code
 * and body. Internal causes are logged where they occur and are not
 * carried into the response.
 *
 * # Error Categories
 *
 * - `NotLoggedIn` - the authentication gate rejected the request
 * - `InvalidCredentials` - signup or signin failed for any reason
 * - `InvalidInputs` - a post update did not pass validation
 * - `MalformedBody` - a create-post body could not be decoded
 * - `FetchFailed` - a single post could not be fetched
 * - `PostNotFound` - the post to update does not exist or is not yours
 * - `Internal` - a store failure on a blog route
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::SharedError;

pub const NOT_LOGGED_IN: &str = "You are not logged in";
pub const INVALID: &str = "Invalid";
pub const INPUTS_NOT_CORRECT: &str = "Inputs are not correct";
pub const MALFORMED_BODY: &str = "Malformed request body";
pub const FETCH_FAILED: &str = "Error while fetching blog post";
pub const POST_NOT_FOUND: &str = "Blog post not found";
pub const INTERNAL: &str = "Internal server error";

/// Handler-facing error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not logged in")]
    NotLoggedIn,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("inputs are not correct")]
    InvalidInputs,

    #[error("malformed request body")]
    MalformedBody,

    #[error("error while fetching blog post")]
    FetchFailed,

    #[error("blog post not found")]
    PostNotFound,

    #[error("internal error: {0}")]
    Internal(#[from] StoreError),
}

impl From<SharedError> for ApiError {
    fn from(_: SharedError) -> Self {
        Self::InvalidInputs
    }
}

impl ApiError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotLoggedIn`, `InvalidCredentials` - 403 Forbidden
    /// - `InvalidInputs`, `FetchFailed` - 411 Length Required
    /// - `MalformedBody` - 400 Bad Request
    /// - `PostNotFound` - 404 Not Found
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotLoggedIn | Self::InvalidCredentials => StatusCode::FORBIDDEN,
            Self::InvalidInputs | Self::FetchFailed => StatusCode::LENGTH_REQUIRED,
            Self::MalformedBody => StatusCode::BAD_REQUEST,
            Self::PostNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotLoggedIn => NOT_LOGGED_IN,
            Self::InvalidCredentials => INVALID,
            Self::InvalidInputs => INPUTS_NOT_CORRECT,
            Self::MalformedBody => MALFORMED_BODY,
            Self::FetchFailed => FETCH_FAILED,
            Self::PostNotFound => POST_NOT_FOUND,
            Self::Internal(_) => INTERNAL,
        }
    }
}
