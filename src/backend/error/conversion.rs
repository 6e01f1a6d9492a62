/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * Credential failures answer with the bare text `Invalid`. Every other
 * error is a JSON object:
 * ```json
 * { "message": "You are not logged in" }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        match self {
            ApiError::InvalidCredentials => (status, message).into_response(),
            _ => (status, Json(serde_json::json!({ "message": message }))).into_response(),
        }
    }
}
