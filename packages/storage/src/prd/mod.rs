// ABOUTME: PRD store contract and its implementations
// ABOUTME: Write-once records listed per owner in creation order

use async_trait::async_trait;

use prdkit_core::{require_present, NewPrd, PrdRecord};

use crate::error::StorageResult;

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryPrdStore;
pub use sqlite::SqlitePrdStore;

/// Persistence boundary for PRD records.
///
/// Records are never updated or deleted once created.
#[async_trait]
pub trait PrdStore: Send + Sync {
    /// Persist a new record and return its assigned id.
    ///
    /// Fails with a validation error, persisting nothing, when the owner is
    /// missing or blank.
    async fn create(&self, record: NewPrd) -> StorageResult<String>;

    /// All records created for `owner_id`, oldest first
    async fn list_by_owner(&self, owner_id: &str) -> StorageResult<Vec<PrdRecord>>;
}

/// Owner id of a new record, trimmed, or a validation error
pub(crate) fn owner_of(record: &NewPrd) -> StorageResult<String> {
    Ok(require_present("ownerId", record.owner_id.as_deref())?.to_string())
}
