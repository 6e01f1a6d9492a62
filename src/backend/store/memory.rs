/**
 * In-Memory Store
 *
 * Keeps users and posts in process memory behind a `tokio::sync::RwLock`.
 * Used when no database is configured and by the test suite. Contents are
 * lost on restart.
 */

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{BlogStore, NewPost, NewUser, PostUpdate, StoreError, UserRecord};
use crate::shared::{AuthorView, PostId, PostView, UserId};

#[derive(Debug, Clone)]
struct PostRow {
    title: String,
    content: String,
    author_id: UserId,
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, UserRecord>,
    posts: BTreeMap<PostId, PostRow>,
    last_user_id: i64,
    last_post_id: i64,
}

impl Tables {
    fn view(&self, id: PostId, row: &PostRow) -> PostView {
        PostView {
            id,
            title: row.title.clone(),
            content: row.content.clone(),
            author: AuthorView {
                name: self.users.get(&row.author_id).and_then(|u| u.name.clone()),
            },
        }
    }
}

/// In-memory `BlogStore`
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn author_of(&self, id: PostId) -> Option<UserId> {
        self.tables.read().await.posts.get(&id).map(|row| row.author_id)
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<UserId, StoreError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.username == user.username) {
            return Err(StoreError::DuplicateUsername(user.username));
        }

        tables.last_user_id += 1;
        let id = UserId(tables.last_user_id);
        tables.users.insert(
            id,
            UserRecord {
                id,
                username: user.username,
                name: user.name,
                password_hash: user.password_hash,
            },
        );

        tracing::debug!("Stored user {}", id);
        Ok(id)
    }

    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.username == username).cloned())
    }

    async fn create_post(&self, post: NewPost) -> Result<PostId, StoreError> {
        let mut tables = self.tables.write().await;
        tables.last_post_id += 1;
        let id = PostId(tables.last_post_id);
        tables.posts.insert(
            id,
            PostRow {
                title: post.title,
                content: post.content,
                author_id: post.author_id,
            },
        );
        Ok(id)
    }

    async fn update_post(&self, update: PostUpdate) -> Result<Option<PostId>, StoreError> {
        let mut tables = self.tables.write().await;
        match tables.posts.get_mut(&update.id) {
            Some(row) if row.author_id == update.author_id => {
                row.title = update.title;
                row.content = update.content;
                Ok(Some(update.id))
            }
            _ => Ok(None),
        }
    }

    async fn list_posts(&self) -> Result<Vec<PostView>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .iter()
            .map(|(id, row)| tables.view(*id, row))
            .collect())
    }

    async fn get_post(&self, id: PostId) -> Result<Option<PostView>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&id).map(|row| tables.view(id, row)))
    }
}
