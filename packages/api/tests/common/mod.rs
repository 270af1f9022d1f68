// ABOUTME: Common test utilities for API integration tests
// ABOUTME: Builds the router over in-memory stores and drives it with oneshot requests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use prdkit_api::{create_router, AppState};
use prdkit_security::{CredentialSigner, HashingParams, LocalAuthService, PasswordHasher, UserStorage};
use prdkit_storage::{connect_in_memory, InMemoryPrdStore};

pub const TEST_SECRET: &[u8] = b"api-test-secret-0123456789abcdefgh";

pub struct TestApp {
    pub router: Router,
    pub prds: Arc<InMemoryPrdStore>,
}

pub fn test_signer() -> CredentialSigner {
    CredentialSigner::new(TEST_SECRET, Duration::hours(1)).unwrap()
}

pub async fn test_app() -> TestApp {
    let pool = connect_in_memory().await.unwrap();
    let auth = LocalAuthService::new(
        UserStorage::new(pool),
        PasswordHasher::new(HashingParams::fast()),
        test_signer(),
    );
    let prds = Arc::new(InMemoryPrdStore::new());

    let router = create_router(AppState::new(prds.clone(), Arc::new(auth)));
    TestApp { router, prds }
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    /// Register and log in, returning (user id, bearer token)
    pub async fn register(&self, name: &str, email: &str, password: &str) -> (String, String) {
        let (status, body) = self
            .post_json(
                "/api/auth/signup",
                None,
                serde_json::json!({ "name": name, "email": email, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "signup failed: {body}");

        let (status, body) = self
            .post_json(
                "/api/auth/login",
                None,
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");

        (
            body["data"]["user"]["id"].as_str().unwrap().to_string(),
            body["data"]["token"].as_str().unwrap().to_string(),
        )
    }
}
