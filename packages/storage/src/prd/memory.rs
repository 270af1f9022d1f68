// ABOUTME: In-memory PRD store used as the reference implementation
// ABOUTME: Records live in an append-only vector behind a write lock

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use prdkit_core::{generate_record_id, NewPrd, PrdRecord};

use super::{owner_of, PrdStore};
use crate::error::{StorageError, StorageResult};

pub struct InMemoryPrdStore {
    records: RwLock<Vec<PrdRecord>>,
    available: AtomicBool,
}

impl InMemoryPrdStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate the backing store going away (or coming back)
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Total number of records across all owners
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn ensure_available(&self) -> StorageResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Unavailable(
                "in-memory store is offline".to_string(),
            ))
        }
    }
}

impl Default for InMemoryPrdStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrdStore for InMemoryPrdStore {
    async fn create(&self, record: NewPrd) -> StorageResult<String> {
        let owner_id = owner_of(&record)?;
        self.ensure_available()?;

        let id = generate_record_id();
        self.records.write().await.push(PrdRecord {
            id: id.clone(),
            owner_id,
            draft: record.draft,
        });

        Ok(id)
    }

    async fn list_by_owner(&self, owner_id: &str) -> StorageResult<Vec<PrdRecord>> {
        self.ensure_available()?;

        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|record| record.owner_id == owner_id)
            .cloned()
            .collect())
    }
}
