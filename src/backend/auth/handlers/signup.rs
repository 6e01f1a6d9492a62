/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/v1/user/signup.
 *
 * # Registration Process
 *
 * 1. Decode `{username, password, name}`
 * 2. Hash the password and create the user
 * 3. Issue a token for the new identity
 * 4. Return the raw token as the response body
 *
 * # Security
 *
 * Every failure (undecodable body, taken username, store or signing error)
 * is answered with the same 403 `Invalid`; the cause is only logged.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::backend::auth::users::create_user;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::SignupInput;

/// Sign up handler
///
/// # Returns
///
/// `200 text/plain` with the token, or `403 Invalid`
///
/// # Example Request
///
/// ```http
/// POST /api/v1/user/signup HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "ada", "password": "analytical", "name": "Ada" }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupInput>, JsonRejection>,
) -> Result<String, ApiError> {
    let Json(input) = payload.map_err(|e| {
        tracing::warn!("Rejected signup body: {}", e);
        ApiError::InvalidCredentials
    })?;
    let username = input.username.clone();
    tracing::info!("Signup request for username: {}", username);

    let user_id = create_user(state.store.as_ref(), input, state.password_cost)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user {}: {}", username, e);
            ApiError::InvalidCredentials
        })?;

    let token = state.tokens.issue(user_id).map_err(|e| {
        tracing::error!("Failed to create token: {}", e);
        ApiError::InvalidCredentials
    })?;

    tracing::info!("User created successfully: {} ({})", username, user_id);
    Ok(token)
}
