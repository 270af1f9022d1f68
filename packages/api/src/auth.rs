// ABOUTME: Authentication context for API requests
// ABOUTME: Resolves the bearer credential into the calling user's identity

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use prdkit_core::UserIdentity;

use crate::error::AppError;
use crate::state::AppState;

/// Current authenticated user
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserIdentity);

impl CurrentUser {
    pub fn id(&self) -> &str {
        &self.0.id
    }

    /// Reject access to another owner's records
    pub fn ensure_owns(&self, owner_id: &str) -> Result<(), AppError> {
        if self.0.id == owner_id.trim() {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "You can only access your own PRD records",
            ))
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value
pub(crate) fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?
            .to_str()
            .map_err(|_| AppError::InvalidCredential)?;
        let token = bearer_token(header)
            .ok_or(AppError::InvalidCredential)?
            .to_string();

        let state = AppState::from_ref(state);
        let identity = state.auth.verify(&token).await?;

        Ok(CurrentUser(identity))
    }
}
