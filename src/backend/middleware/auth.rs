/**
 * Authentication Middleware
 *
 * Guards the blog routes. The middleware reads the `Authorization` header,
 * verifies the bearer token and stores the resolved identity in the request
 * extensions, where handlers pick it up through the `AuthUser` extractor.
 *
 * Every rejection, whatever its cause, is the same 403 response with body
 * `{"message": "You are not logged in"}`.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::auth::tokens::TokenSettings;
use crate::backend::error::ApiError;
use crate::shared::UserId;

/// Identity attached to a request that passed the gate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Token carried by the request
///
/// A missing or non-UTF-8 header reads as the empty string. A leading
/// `Bearer ` is stripped; any other value is passed through unchanged and
/// left for verification to reject.
fn bearer_token(headers: &HeaderMap) -> &str {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    header.strip_prefix("Bearer ").unwrap_or(header)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the Authorization header
/// 2. Verifies it against the configured secret
/// 3. Attaches the identity to the request extensions
///
/// Returns 403 without calling the handler if verification fails for any
/// reason.
pub async fn auth_middleware(
    State(tokens): State<TokenSettings>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = bearer_token(request.headers());

    let user_id = match tokens.verify(token) {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::warn!("Rejected {} {}: {}", request.method(), request.uri().path(), e);
            return ApiError::NotLoggedIn.into_response();
        }
    };

    tracing::debug!("Authenticated user {}", user_id);
    request.extensions_mut().insert(AuthenticatedUser { user_id });

    next.run(request).await
}

/// Axum extractor for the authenticated user
///
/// Only usable behind `auth_middleware`; anywhere else it rejects with the
/// same response as the gate.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub UserId);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .map(|user| AuthUser(user.user_id))
            .ok_or_else(|| {
                tracing::error!("AuthenticatedUser not found in request extensions");
                ApiError::NotLoggedIn
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    const SECRET: &str = "gate-secret";

    fn app() -> Router {
        let tokens = TokenSettings::new(SECRET);
        Router::new()
            .route("/whoami", get(|AuthUser(id): AuthUser| async move { id.to_string() }))
            .route_layer(from_fn_with_state(tokens, auth_middleware))
    }

    async fn call(authorization: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        let response = app().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), "");

        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers), "abc.def.ghi");

        headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());
        assert_eq!(bearer_token(&headers), "Basic dXNlcjpwYXNz");
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let (status, body) = call(None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, r#"{"message":"You are not logged in"}"#);
    }

    #[tokio::test]
    async fn test_rejections_are_indistinguishable() {
        let other_secret = crate::backend::auth::tokens::issue_token(UserId(1), "other").unwrap();
        let missing = call(None).await;

        for header in [
            "Bearer garbage".to_string(),
            "Bearer ".to_string(),
            format!("Bearer {}", other_secret),
            "Basic dXNlcjpwYXNz".to_string(),
        ] {
            assert_eq!(call(Some(header.as_str())).await, missing, "header {:?}", header);
        }
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let token = TokenSettings::new(SECRET).issue(UserId(42)).unwrap();
        let (status, body) = call(Some(&format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "42");
    }

    #[tokio::test]
    async fn test_token_without_scheme_still_verifies() {
        let token = TokenSettings::new(SECRET).issue(UserId(8)).unwrap();
        let (status, body) = call(Some(&token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "8");
    }

    #[tokio::test]
    async fn test_extractor_without_gate_rejects() {
        let app: Router = Router::new()
            .route("/open", get(|AuthUser(id): AuthUser| async move { id.to_string() }));
        let response = app
            .oneshot(Request::builder().uri("/open").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
