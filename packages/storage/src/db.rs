// ABOUTME: Database connection management and schema migrations
// ABOUTME: Opens file-backed or in-memory SQLite pools with the prdkit schema applied

use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::StorageResult;

/// Maximum connections for a file-backed pool
const MAX_CONNECTIONS: u32 = 10;

/// How long to wait for a free connection before reporting the store unavailable
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply embedded migrations to a pool
pub async fn run_migrations(pool: &SqlitePool) -> StorageResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Open the database at `database_path`, or the default location when `None`
pub async fn connect(database_path: Option<PathBuf>) -> StorageResult<SqlitePool> {
    let database_path = database_path.unwrap_or_else(prdkit_core::default_database_path);
    connect_file(&database_path).await
}

/// Open (creating if needed) a file-backed database and migrate it
pub async fn connect_file(database_path: &Path) -> StorageResult<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    debug!("Connecting to database: {}", database_path.display());

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    info!("Database connection established");

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Open a private in-memory database and migrate it.
///
/// Every SQLite in-memory connection is its own database, so the pool is
/// capped at one connection that is never recycled.
pub async fn connect_in_memory() -> StorageResult<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect("sqlite::memory:")
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}
