// ABOUTME: Server bootstrap for the prdkit binary
// ABOUTME: Builds application state from config and serves the API with CORS and tracing

use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use chrono::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use prdkit_api::{create_router, AppState};
use prdkit_security::{CredentialSigner, LocalAuthService, PasswordHasher, UserStorage};
use prdkit_storage::{SqlitePool, SqlitePrdStore};

pub mod config;


use config::{Config, ConfigError};

/// Install the global tracing subscriber (`RUST_LOG`, default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Wire the stores and auth service over an open pool
pub fn build_state(config: &Config, pool: SqlitePool) -> anyhow::Result<AppState> {
    let ttl = Duration::try_seconds(config.token_ttl_secs)
        .ok_or_else(|| ConfigError::InvalidTokenTtl(config.token_ttl_secs.to_string()))?;
    let signer = CredentialSigner::new(config.require_token_secret()?, ttl)?;
    let auth = LocalAuthService::new(
        UserStorage::new(pool.clone()),
        PasswordHasher::default(),
        signer,
    );

    Ok(AppState::new(
        Arc::new(SqlitePrdStore::new(pool)),
        Arc::new(auth),
    ))
}

/// API router with CORS and request tracing applied
pub fn build_app(config: &Config, state: AppState) -> anyhow::Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Ok(create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    // Fail on a missing secret before touching the database
    config.require_token_secret()?;

    let pool = prdkit_storage::connect(Some(config.database_path.clone()))
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database_path.display()
            )
        })?;

    let state = build_state(&config, pool)?;
    let app = build_app(&config, state)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on {}", addr);
    info!("CORS origin: {}", config.cors_origin);

    axum::serve(listener, app).await?;

    Ok(())
}
