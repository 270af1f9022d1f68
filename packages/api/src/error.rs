// ABOUTME: Application error type returned by every handler
// ABOUTME: Maps domain failures to status codes and a sanitized JSON error envelope

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use prdkit_core::ValidationError;
use prdkit_security::AuthError;
use prdkit_storage::StorageError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredential,

    #[error("Credential expired")]
    ExpiredCredential,

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Structured error response format for API consistency
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
    pub request_id: String,
}

#[derive(Serialize)]
pub(crate) struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl AppError {
    fn to_status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::InvalidCredential => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            AppError::ExpiredCredential => (StatusCode::UNAUTHORIZED, "CREDENTIAL_EXPIRED"),
            AppError::Forbidden { .. } => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::StoreUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Get user-friendly error message (sanitized for external consumption)
    fn to_user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(what) => format!("{} not found", what),
            AppError::Unauthorized => "Authentication required".to_string(),
            AppError::InvalidCredential => "Invalid credentials".to_string(),
            AppError::ExpiredCredential => "Credential has expired, please log in again".to_string(),
            AppError::Forbidden { message } => message.clone(),
            AppError::Conflict(msg) => msg.clone(),
            AppError::StoreUnavailable(_) => {
                "The data store is temporarily unavailable".to_string()
            }
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();
        let (status_code, error_code) = self.to_status_and_code();
        let user_message = self.to_user_message();

        match &self {
            AppError::Internal(err) => {
                error!(
                    request_id = %request_id,
                    error = %err,
                    "Internal server error occurred"
                );
            }
            AppError::StoreUnavailable(detail) => {
                error!(
                    request_id = %request_id,
                    storage_error = %detail,
                    "Backing store unavailable"
                );
            }
            _ => {
                info!(
                    request_id = %request_id,
                    error_code = %error_code,
                    error = %self,
                    "API error response"
                );
            }
        }

        let body = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: error_code.to_string(),
                message: user_message,
            },
            request_id,
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => e.into(),
            StorageError::NotFound(what) => AppError::NotFound(what),
            StorageError::Duplicate(what) => AppError::Conflict(what),
            StorageError::Unavailable(detail) => AppError::StoreUnavailable(detail),
            other => AppError::Internal(other.into()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(e) => e.into(),
            AuthError::NotFound(_) => AppError::NotFound("Account".to_string()),
            AuthError::InvalidCredential => AppError::InvalidCredential,
            AuthError::ExpiredCredential => AppError::ExpiredCredential,
            AuthError::Conflict(email) => {
                AppError::Conflict(format!("An account already exists for {}", email))
            }
            AuthError::Storage(e) => e.into(),
            other => AppError::Internal(other.into()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;
