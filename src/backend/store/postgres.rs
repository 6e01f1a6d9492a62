/**
 * PostgreSQL Store
 *
 * `BlogStore` backed by a `sqlx::PgPool`. The schema lives in `migrations/`
 * and is applied with `PgStore::migrate` at startup.
 */

use async_trait::async_trait;
use sqlx::PgPool;

use super::{BlogStore, NewPost, NewUser, PostUpdate, StoreError, UserRecord};
use crate::shared::{AuthorView, PostId, PostView, UserId};

/// Unique violation
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    name: Option<String>,
    password_hash: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            username: row.username,
            name: row.name,
            password_hash: row.password_hash,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    author_name: Option<String>,
}

impl From<PostRow> for PostView {
    fn from(row: PostRow) -> Self {
        Self {
            id: PostId(row.id),
            title: row.title,
            content: row.content,
            author: AuthorView { name: row.author_name },
        }
    }
}

/// PostgreSQL `BlogStore`
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<UserId, StoreError> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (username, name, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id
            "#
        )
        .bind(&user.username)
        .bind(&user.name)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => Ok(UserId(id)),
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(StoreError::DuplicateUsername(user.username))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, name, password_hash
            FROM users
            WHERE username = $1
            "#
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRecord::from))
    }

    async fn create_post(&self, post: NewPost) -> Result<PostId, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO blogs (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author_id.0)
        .fetch_one(&self.pool)
        .await?;

        Ok(PostId(id))
    }

    async fn update_post(&self, update: PostUpdate) -> Result<Option<PostId>, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE blogs
            SET title = $1, content = $2, updated_at = NOW()
            WHERE id = $3 AND author_id = $4
            RETURNING id
            "#
        )
        .bind(&update.title)
        .bind(&update.content)
        .bind(update.id.0)
        .bind(update.author_id.0)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id.map(PostId))
    }

    async fn list_posts(&self) -> Result<Vec<PostView>, StoreError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT b.id, b.title, b.content, u.name AS author_name
            FROM blogs b
            JOIN users u ON u.id = b.author_id
            ORDER BY b.id
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostView::from).collect())
    }

    async fn get_post(&self, id: PostId) -> Result<Option<PostView>, StoreError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT b.id, b.title, b.content, u.name AS author_name
            FROM blogs b
            JOIN users u ON u.id = b.author_id
            WHERE b.id = $1
            "#
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostView::from))
    }
}
