/**
 * Signin Handler
 *
 * POST /api/v1/user/signin. Matches `{username, password}` against the
 * store and returns a fresh token as plain text.
 *
 * An unknown username, a wrong password and an internal failure all answer
 * 403 `Invalid`, so callers cannot enumerate accounts.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::backend::auth::users::find_user_by_credentials;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::SigninInput;

/// Sign in handler
pub async fn signin(
    State(state): State<AppState>,
    payload: Result<Json<SigninInput>, JsonRejection>,
) -> Result<String, ApiError> {
    let Json(input) = payload.map_err(|e| {
        tracing::warn!("Rejected signin body: {}", e);
        ApiError::InvalidCredentials
    })?;
    tracing::info!("Signin request for: {}", input.username);

    let user_id = find_user_by_credentials(state.store.as_ref(), &input.username, &input.password)
        .await
        .map_err(|e| {
            tracing::error!("Credential lookup failed: {}", e);
            ApiError::InvalidCredentials
        })?
        .ok_or_else(|| {
            tracing::warn!("Invalid credentials for user: {}", input.username);
            ApiError::InvalidCredentials
        })?;

    let token = state.tokens.issue(user_id).map_err(|e| {
        tracing::error!("Failed to create token: {}", e);
        ApiError::InvalidCredentials
    })?;

    tracing::info!("User signed in: {} ({})", input.username, user_id);
    Ok(token)
}
