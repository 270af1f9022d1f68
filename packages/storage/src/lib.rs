// ABOUTME: Data layer and persistence for prdkit
// ABOUTME: SQLite pool management, migrations, and the PRD store implementations

pub mod db;
pub mod error;
pub mod prd;

// Re-export main types for convenience
pub use db::{connect, connect_file, connect_in_memory, run_migrations};
pub use error::{StorageError, StorageResult};
pub use prd::{InMemoryPrdStore, PrdStore, SqlitePrdStore};
pub use sqlx::SqlitePool;
