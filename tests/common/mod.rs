//! Common test utilities
//!
//! Builds the full router over an in-memory store and drives it in-process.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use inkpost::backend::auth::tokens::TokenSettings;
use inkpost::backend::routes::create_router;
use inkpost::backend::server::AppState;
use inkpost::backend::store::MemoryStore;

pub const SECRET: &str = "integration-test-secret";

/// Lowest bcrypt cost, keeps signup fast in tests
pub const TEST_COST: u32 = 4;

/// Router over a fresh in-memory store
pub fn test_app() -> Router {
    test_app_with_tokens(TokenSettings::new(SECRET))
}

/// Router over a fresh in-memory store with custom token settings
pub fn test_app_with_tokens(tokens: TokenSettings) -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()), tokens, TEST_COST);
    create_router(state)
}

/// Response status and body text
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("Expected JSON body, got {:?}: {}", self.body, e))
    }
}

/// Send one request through the router
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Sign up a user and return its token
pub async fn signup(app: &Router, username: &str, password: &str, name: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/v1/user/signup",
        None,
        Some(serde_json::json!({
            "username": username,
            "password": password,
            "name": name,
        })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "signup failed: {}", response.body);
    response.body
}

/// Create a post and return its id
pub async fn create_post(app: &Router, token: &str, title: &str, content: &str) -> i64 {
    let response = send(
        app,
        Method::POST,
        "/api/v1/blog",
        Some(&bearer(token)),
        Some(serde_json::json!({ "title": title, "content": content })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "create failed: {}", response.body);
    response.json()["id"].as_i64().unwrap()
}
