//! Blog API integration tests
//!
//! The authentication gate and the post handlers through the full router.

#![cfg(feature = "ssr")]

mod common;

use axum::http::{Method, StatusCode};
use common::{bearer, create_post, send, signup, test_app, test_app_with_tokens, SECRET};
use inkpost::backend::auth::tokens::{issue_token, verify_token, Claims, TokenSettings};
use inkpost::shared::UserId;
use jsonwebtoken::{encode, EncodingKey, Header};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;

const NOT_LOGGED_IN: &str = r#"{"message":"You are not logged in"}"#;

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = test_app();

    for (method, uri) in [
        (Method::POST, "/api/v1/blog"),
        (Method::PUT, "/api/v1/blog"),
        (Method::GET, "/api/v1/blog/bulk"),
        (Method::GET, "/api/v1/blog/1"),
    ] {
        let response = send(&app, method, uri, None, Some(json!({}))).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{}", uri);
        assert_eq!(response.body, NOT_LOGGED_IN, "{}", uri);
    }
}

#[tokio::test]
async fn test_garbage_token_looks_like_missing_token() {
    let app = test_app();

    let missing = send(&app, Method::GET, "/api/v1/blog/bulk", None, None).await;
    let garbage = send(&app, Method::GET, "/api/v1/blog/bulk", Some("Bearer garbage"), None).await;

    assert_eq!(garbage.status, missing.status);
    assert_eq!(garbage.body, missing.body);
}

#[tokio::test]
async fn test_unknown_blog_path_requires_token() {
    let app = test_app();

    for (method, uri) in [
        (Method::GET, "/api/v1/blog/1/extra"),
        (Method::GET, "/api/v1/blog/bulk/more"),
        (Method::DELETE, "/api/v1/blog"),
        (Method::POST, "/api/v1/blog/bulk"),
    ] {
        let response = send(&app, method, uri, None, None).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{}", uri);
        assert_eq!(response.body, NOT_LOGGED_IN, "{}", uri);
    }
}

#[tokio::test]
async fn test_unknown_blog_path_with_token_is_not_found() {
    let app = test_app();
    let token = signup(&app, "alice", "pw", "Alice").await;

    let response = send(
        &app,
        Method::GET,
        "/api/v1/blog/1/extra",
        Some(bearer(&token).as_str()),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = test_app_with_tokens(
        TokenSettings::new(SECRET).with_ttl(Some(Duration::from_secs(3600))),
    );
    let fresh = signup(&app, "alice", "pw", "Alice").await;

    let claims = Claims {
        id: verify_token(&fresh, SECRET).unwrap(),
        exp: Some(jsonwebtoken::get_current_timestamp() - 3600),
    };
    let expired = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap();

    let response = send(&app, Method::GET, "/api/v1/blog/bulk", Some(bearer(&expired).as_str()), None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body, NOT_LOGGED_IN);

    let response = send(&app, Method::GET, "/api/v1/blog/bulk", Some(bearer(&fresh).as_str()), None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_token_from_other_secret_is_rejected() {
    let app = test_app();
    let forged = issue_token(UserId(1), "not-the-server-secret").unwrap();

    let response = send(&app, Method::GET, "/api/v1/blog/bulk", Some(bearer(&forged).as_str()), None).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body, NOT_LOGGED_IN);
}

#[tokio::test]
async fn test_signup_then_create_post() {
    let app = test_app();
    let token = signup(&app, "a", "p", "A").await;

    let id = create_post(&app, &token, "First post", "Hello").await;

    let response = send(
        &app,
        Method::GET,
        &format!("/api/v1/blog/{}", id),
        Some(bearer(&token).as_str()),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "blog": {
                "id": id,
                "title": "First post",
                "content": "Hello",
                "author": { "name": "A" }
            }
        })
    );
}

#[tokio::test]
async fn test_author_comes_from_token() {
    let app = test_app();
    let alice = signup(&app, "alice", "pw", "Alice").await;
    let bob = signup(&app, "bob", "pw", "Bob").await;

    create_post(&app, &alice, "By Alice", "a").await;
    create_post(&app, &bob, "By Bob", "b").await;

    let response = send(&app, Method::GET, "/api/v1/blog/bulk", Some(bearer(&alice).as_str()), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let blogs = response.json()["blogs"].clone();
    assert_eq!(blogs[0]["title"], "By Alice");
    assert_eq!(blogs[0]["author"]["name"], "Alice");
    assert_eq!(blogs[1]["title"], "By Bob");
    assert_eq!(blogs[1]["author"]["name"], "Bob");
}

#[tokio::test]
async fn test_create_post_skips_field_validation() {
    let app = test_app();
    let token = signup(&app, "alice", "pw", "Alice").await;

    let id = create_post(&app, &token, "", "").await;

    assert!(id > 0);
}

#[tokio::test]
async fn test_create_post_malformed_body() {
    let app = test_app();
    let token = signup(&app, "alice", "pw", "Alice").await;

    let response = send(
        &app,
        Method::POST,
        "/api/v1/blog",
        Some(bearer(&token).as_str()),
        Some(json!({ "title": "No content" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "message": "Malformed request body" }));
}

#[tokio::test]
async fn test_update_post() {
    let app = test_app();
    let token = signup(&app, "alice", "pw", "Alice").await;
    let id = create_post(&app, &token, "Draft", "v1").await;

    let response = send(
        &app,
        Method::PUT,
        "/api/v1/blog",
        Some(bearer(&token).as_str()),
        Some(json!({ "id": id, "title": "Final", "content": "v2" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "id": id }));

    let fetched = send(
        &app,
        Method::GET,
        &format!("/api/v1/blog/{}", id),
        Some(bearer(&token).as_str()),
        None,
    )
    .await;
    assert_eq!(fetched.json()["blog"]["title"], "Final");
    assert_eq!(fetched.json()["blog"]["content"], "v2");
}

#[tokio::test]
async fn test_update_post_invalid_inputs() {
    let app = test_app();
    let token = signup(&app, "alice", "pw", "Alice").await;
    let id = create_post(&app, &token, "Draft", "v1").await;

    for body in [
        json!({ "title": "Missing id", "content": "x" }),
        json!({ "id": "one", "title": "t", "content": "c" }),
        json!({ "id": id, "title": "", "content": "c" }),
        json!({ "id": id, "title": "t", "content": "   " }),
    ] {
        let response = send(&app, Method::PUT, "/api/v1/blog", Some(bearer(&token).as_str()), Some(body.clone())).await;
        assert_eq!(response.status, StatusCode::LENGTH_REQUIRED, "{}", body);
        assert_eq!(response.json(), json!({ "message": "Inputs are not correct" }));
    }
}

#[tokio::test]
async fn test_update_post_of_other_user() {
    let app = test_app();
    let alice = signup(&app, "alice", "pw", "Alice").await;
    let bob = signup(&app, "bob", "pw", "Bob").await;
    let id = create_post(&app, &alice, "Mine", "v1").await;

    let response = send(
        &app,
        Method::PUT,
        "/api/v1/blog",
        Some(bearer(&bob).as_str()),
        Some(json!({ "id": id, "title": "Taken", "content": "v2" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json(), json!({ "message": "Blog post not found" }));
}

#[tokio::test]
async fn test_get_missing_post() {
    let app = test_app();
    let token = signup(&app, "alice", "pw", "Alice").await;

    let response = send(&app, Method::GET, "/api/v1/blog/999", Some(bearer(&token).as_str()), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "blog": null }));
}

#[tokio::test]
async fn test_get_post_with_non_numeric_id() {
    let app = test_app();
    let token = signup(&app, "alice", "pw", "Alice").await;

    let response = send(&app, Method::GET, "/api/v1/blog/abc", Some(bearer(&token).as_str()), None).await;

    assert_eq!(response.status, StatusCode::LENGTH_REQUIRED);
    assert_eq!(response.json(), json!({ "message": "Error while fetching blog post" }));
}

#[tokio::test]
async fn test_list_posts_empty() {
    let app = test_app();
    let token = signup(&app, "alice", "pw", "Alice").await;

    let response = send(&app, Method::GET, "/api/v1/blog/bulk", Some(bearer(&token).as_str()), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "blogs": [] }));
}
