// ABOUTME: HTTP request handlers for account signup and login
// ABOUTME: Thin adapters over the AuthService boundary operations

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use prdkit_core::UserIdentity;

use crate::error::ApiResult;
use crate::response::{created, ok};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub user: UserIdentity,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user_id: String,
}

/// Exchange email and password for a bearer credential
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload?;
    info!("Login attempt");

    let session = state.auth.login(&request.email, &request.password).await?;

    Ok(ok(LoginResponse {
        message: "Login successful".to_string(),
        user: session.identity,
        token: session.credential,
        expires_at: session.expires_at,
    }))
}

/// Register a new account
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload?;
    info!("Signup request");

    let confirmation = state
        .auth
        .signup(&request.name, &request.email, &request.password)
        .await?;

    Ok(created(SignupResponse {
        message: "User registered successfully".to_string(),
        user_id: confirmation.user_id,
    }))
}
