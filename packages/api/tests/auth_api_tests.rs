// ABOUTME: Integration tests for the signup and login endpoints
// ABOUTME: Verifies response envelopes and the authentication error mapping

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::test_app;

#[tokio::test]
async fn test_signup_returns_user_id() {
    let app = test_app().await;

    let (status, body) = app
        .post_json(
            "/api/auth/signup",
            None,
            json!({ "name": "Ada", "email": "ada@example.com", "password": "pw" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["message"], "User registered successfully");
    assert!(body["data"]["userId"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_login_returns_identity_and_token() {
    let app = test_app().await;
    let (user_id, token) = app.register("Ada", "ada@example.com", "pw").await;

    let (status, body) = app
        .post_json(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "pw" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "Login successful");
    assert_eq!(body["data"]["user"]["id"], user_id.as_str());
    assert_eq!(body["data"]["user"]["name"], "Ada");
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");
    assert!(!token.is_empty());
    assert!(body["data"]["expiresAt"].is_string());
}

#[tokio::test]
async fn test_duplicate_signup_is_conflict() {
    let app = test_app().await;
    app.register("Ada", "ada@example.com", "pw").await;

    let (status, body) = app
        .post_json(
            "/api/auth/signup",
            None,
            json!({ "name": "Ada 2", "email": "ADA@example.com", "password": "pw2" }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert!(body["requestId"].is_string());
}

#[tokio::test]
async fn test_login_unknown_email_is_not_found() {
    let app = test_app().await;

    let (status, body) = app
        .post_json(
            "/api/auth/login",
            None,
            json!({ "email": "nobody@example.com", "password": "pw" }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let app = test_app().await;
    app.register("Ada", "ada@example.com", "pw").await;

    let (status, body) = app
        .post_json(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "nope" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_signup_missing_fields_is_validation_error() {
    let app = test_app().await;

    let (status, body) = app
        .post_json("/api/auth/signup", None, json!({ "email": "ada@example.com" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = test_app().await;

    let (status, body) = app
        .send(
            axum::http::Method::POST,
            "/api/auth/login",
            None,
            Some(json!("just a string")),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
