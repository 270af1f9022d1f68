// ABOUTME: Liveness endpoint
// ABOUTME: Reports service name, version, and current timestamp

use axum::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "prdkit"
    }))
}
