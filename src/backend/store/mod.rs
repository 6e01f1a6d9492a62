//! Store Module
//!
//! Persistence for users and blog posts. Handlers talk to a `BlogStore`
//! trait object so the server can run against PostgreSQL in production and
//! an in-memory store in development and tests.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - BlogStore trait, records and errors
//! ├── postgres.rs  - sqlx/PostgreSQL implementation
//! └── memory.rs    - in-memory implementation
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::shared::{PostId, PostView, UserId};

/// PostgreSQL-backed store
pub mod postgres;

/// In-memory store
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Shared handle to the configured store
pub type SharedStore = Arc<dyn BlogStore>;

/// Stored user, including the password hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub name: Option<String>,
    /// bcrypt hash, never returned to clients
    pub password_hash: String,
}

/// Fields for a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
}

/// Fields for a new post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: UserId,
}

/// Replacement title and content for a post owned by `author_id`
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub author_id: UserId,
    pub title: String,
    pub content: String,
}

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("username already taken: {0}")]
    DuplicateUsername(String),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Users and blog posts
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Insert a user and return its new identity
    async fn create_user(&self, user: NewUser) -> Result<UserId, StoreError>;

    async fn find_user_by_username(&self, username: &str)
        -> Result<Option<UserRecord>, StoreError>;

    /// Insert a post and return its id
    async fn create_post(&self, post: NewPost) -> Result<PostId, StoreError>;

    /// Replace title and content of a post
    ///
    /// Returns `None` when no post with that id belongs to `author_id`.
    async fn update_post(&self, update: PostUpdate) -> Result<Option<PostId>, StoreError>;

    /// All posts, ordered by id
    async fn list_posts(&self) -> Result<Vec<PostView>, StoreError>;

    async fn get_post(&self, id: PostId) -> Result<Option<PostView>, StoreError>;
}
