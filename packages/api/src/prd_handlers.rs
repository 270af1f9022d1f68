// ABOUTME: HTTP request handlers for PRD generation and persistence
// ABOUTME: Records are always assembled server-side from the free-text fields

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Response,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use prdkit_core::{assemble, assemble_at, NewPrd, PrdFields};

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::response::{created, ok};
use crate::state::AppState;

/// Request body for saving a PRD. Derived sections the client may send
/// alongside the fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrdRequest {
    pub owner_id: Option<String>,
    #[serde(flatten)]
    pub fields: PrdFields,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedPrd {
    pub id: String,
}

/// Assemble and persist a PRD for the authenticated owner
pub async fn create_prd(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<CreatePrdRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload?;
    info!("Creating PRD for user {}", user.id());

    if let Some(owner_id) = request.owner_id.as_deref() {
        if !owner_id.trim().is_empty() {
            user.ensure_owns(owner_id)?;
        }
    }

    let draft = match request.created_at {
        Some(created_at) => assemble_at(&request.fields, created_at),
        None => assemble(&request.fields),
    };

    let id = state
        .prds
        .create(NewPrd {
            owner_id: request.owner_id,
            draft,
        })
        .await?;

    Ok(created(CreatedPrd { id }))
}

/// List the authenticated owner's PRDs, oldest first
pub async fn list_prds_by_owner(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(owner_id): Path<String>,
) -> ApiResult<Response> {
    info!("Listing PRDs for owner {}", owner_id);
    user.ensure_owns(&owner_id)?;

    let records = state.prds.list_by_owner(owner_id.trim()).await?;
    Ok(ok(records))
}

/// Assemble a draft without saving it
pub async fn generate_prd(payload: Result<Json<PrdFields>, JsonRejection>) -> ApiResult<Response> {
    let Json(fields) = payload?;
    info!("Generating PRD preview");

    Ok(ok(assemble(&fields)))
}
