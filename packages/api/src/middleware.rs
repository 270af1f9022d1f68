// ABOUTME: Shared HTTP middleware
// ABOUTME: Converts handler panics into the standard JSON error envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;
use uuid::Uuid;

use crate::error::{ErrorDetail, ErrorResponse};

/// Create a panic handler that returns consistent error responses
pub fn create_panic_handler(
) -> CatchPanicLayer<fn(Box<dyn std::any::Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic)
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let panic_message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic occurred"
    };

    error!(
        request_id = %request_id,
        panic_message = %panic_message,
        "Server panic occurred"
    );

    let body = ErrorResponse {
        success: false,
        error: ErrorDetail {
            code: "INTERNAL_ERROR".to_string(),
            message: "An internal server error occurred".to_string(),
        },
        request_id,
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
