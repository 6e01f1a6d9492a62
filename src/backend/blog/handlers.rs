/**
 * Blog Post Handlers
 *
 * Thin adapters between HTTP and the store. The author of a post is always
 * the identity the gate attached to the request, never a value from the
 * body.
 *
 * # Validation
 *
 * Update bodies go through `UpdatePostInput::validate` and fail with 411.
 * Create bodies are only decoded; their fields are not validated.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::store::{NewPost, PostUpdate, SharedStore};
use crate::shared::{
    CreatePostInput, PostId, PostIdResponse, PostListResponse, PostResponse, UpdatePostInput,
};

/// Create a post authored by the caller
pub async fn create_post(
    State(store): State<SharedStore>,
    AuthUser(author_id): AuthUser,
    payload: Result<Json<CreatePostInput>, JsonRejection>,
) -> Result<Json<PostIdResponse>, ApiError> {
    let Json(input) = payload.map_err(|e| {
        tracing::warn!("Rejected create-post body: {}", e);
        ApiError::MalformedBody
    })?;

    let id = store
        .create_post(NewPost {
            title: input.title,
            content: input.content,
            author_id,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to create post for user {}: {}", author_id, e);
            ApiError::from(e)
        })?;

    tracing::info!("User {} created post {}", author_id, id);
    Ok(Json(PostIdResponse { id }))
}

/// Update the title and content of one of the caller's posts
///
/// # Errors
///
/// * `411` - body missing fields or failing validation
/// * `404` - no such post, or the caller is not its author
pub async fn update_post(
    State(store): State<SharedStore>,
    AuthUser(author_id): AuthUser,
    payload: Result<Json<UpdatePostInput>, JsonRejection>,
) -> Result<Json<PostIdResponse>, ApiError> {
    let Json(input) = payload.map_err(|e| {
        tracing::warn!("Rejected update-post body: {}", e);
        ApiError::InvalidInputs
    })?;
    input.validate().map_err(|e| {
        tracing::warn!("Update-post validation failed: {}", e);
        ApiError::from(e)
    })?;

    let post_id = input.id;
    let updated = store
        .update_post(PostUpdate {
            id: post_id,
            author_id,
            title: input.title,
            content: input.content,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to update post {}: {}", post_id, e);
            ApiError::from(e)
        })?;

    let id = updated.ok_or_else(|| {
        tracing::warn!("User {} cannot update post {}", author_id, post_id);
        ApiError::PostNotFound
    })?;

    Ok(Json(PostIdResponse { id }))
}

/// List every post with its author's name
pub async fn list_posts(
    State(store): State<SharedStore>,
) -> Result<Json<PostListResponse>, ApiError> {
    let blogs = store.list_posts().await.map_err(|e| {
        tracing::error!("Failed to list posts: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(PostListResponse { blogs }))
}

/// Fetch a single post
///
/// A missing post is `{"blog": null}`. A non-numeric id or a store failure
/// is 411.
pub async fn get_post(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
) -> Result<Json<PostResponse>, ApiError> {
    let id = raw_id.parse::<i64>().map(PostId).map_err(|_| {
        tracing::warn!("Invalid post id: {:?}", raw_id);
        ApiError::FetchFailed
    })?;

    let blog = store.get_post(id).await.map_err(|e| {
        tracing::error!("Failed to fetch post {}: {}", id, e);
        ApiError::FetchFailed
    })?;

    Ok(Json(PostResponse { blog }))
}
