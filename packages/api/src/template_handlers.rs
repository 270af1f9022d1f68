// ABOUTME: HTTP request handlers for the built-in PRD template catalog
// ABOUTME: Read-only listing and lookup by id

use axum::{extract::Path, response::Response};
use tracing::info;

use prdkit_core::{find_template, list_templates as catalog};

use crate::error::{ApiResult, AppError};
use crate::response::ok;

/// List all templates in catalog order
pub async fn list_templates() -> Response {
    info!("Listing PRD templates");
    ok(catalog())
}

/// Get a specific template by ID
pub async fn get_template(Path(template_id): Path<String>) -> ApiResult<Response> {
    info!("Getting template: {}", template_id);

    find_template(&template_id)
        .map(ok)
        .ok_or_else(|| AppError::not_found(format!("Template '{}'", template_id)))
}
