// ABOUTME: HTTP API layer for prdkit providing REST endpoints and routing
// ABOUTME: Wires the template catalog, assembler, PRD store, and auth service to axum

use axum::{
    routing::{get, post},
    Router,
};

pub mod auth;
pub mod auth_handlers;
pub mod error;
pub mod health;
pub mod middleware;
pub mod prd_handlers;
pub mod response;
pub mod state;
pub mod template_handlers;

pub use error::{ApiResult, AppError};
pub use state::AppState;

/// Creates the PRD router (nested under /api/prds)
pub fn create_prds_router() -> Router<AppState> {
    Router::new()
        .route("/", post(prd_handlers::create_prd))
        .route("/generate", post(prd_handlers::generate_prd))
        .route("/owner/{owner_id}", get(prd_handlers::list_prds_by_owner))
}

/// Creates the auth router (nested under /api/auth)
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth_handlers::login))
        .route("/signup", post(auth_handlers::signup))
}

/// Creates the template catalog router (nested under /api/templates)
pub fn create_templates_router() -> Router<AppState> {
    Router::new()
        .route("/", get(template_handlers::list_templates))
        .route("/{id}", get(template_handlers::get_template))
}

/// Full application router with shared state and panic handling applied
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .nest("/api/prds", create_prds_router())
        .nest("/api/auth", create_auth_router())
        .nest("/api/templates", create_templates_router())
        .layer(middleware::create_panic_handler())
        .with_state(state)
}
