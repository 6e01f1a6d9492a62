/**
 * Blog Post Types
 *
 * Request bodies accepted by the `/api/v1/blog` endpoints and the views they
 * return.
 *
 * # Validation
 *
 * `UpdatePostInput::validate` is applied by the update handler. The create
 * handler only decodes `CreatePostInput` and does not validate its fields.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::error::SharedError;

/// Unique reference to a blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Create post request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
}

/// Update post request
///
/// Replaces the title and content of an existing post.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UpdatePostInput {
    /// Post to update
    pub id: PostId,
    /// New title
    pub title: String,
    /// New body
    pub content: String,
}

impl UpdatePostInput {
    /// Check field contents
    ///
    /// Rejects a non-positive id and blank title or content.
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.id.0 <= 0 {
            return Err(SharedError::validation("id", "Post id must be positive"));
        }
        if self.title.trim().is_empty() {
            return Err(SharedError::validation("title", "Title cannot be empty"));
        }
        if self.content.trim().is_empty() {
            return Err(SharedError::validation("content", "Content cannot be empty"));
        }
        Ok(())
    }
}

/// Author as shown alongside a post
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthorView {
    pub name: Option<String>,
}

/// Post as returned by the list and get endpoints
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: AuthorView,
}

/// `{"id": n}` body returned after create and update
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostIdResponse {
    pub id: PostId,
}

/// `GET /api/v1/blog/bulk` body
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostListResponse {
    pub blogs: Vec<PostView>,
}

/// `GET /api/v1/blog/{id}` body; `blog` is `null` when no such post exists
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostResponse {
    pub blog: Option<PostView>,
}
