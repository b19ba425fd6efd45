//! # Memory Store
//!
//! In-memory [`ContentStore`] backend. Serves as the test fixture and as
//! a ready-made engine for single-process deployments.

use std::collections::HashMap;

use async_trait::async_trait;
use catalog_types::{Content, ContentPatch};
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::store::{ContentStore, StoreResult};

/// Lock-guarded map backend.
///
/// All methods take `&self`; the internal `RwLock` keeps concurrent
/// readers and writers safe. Critical sections never await, so holding
/// the lock across an operation is fine inside async callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Uuid, Content>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn create(&self, patch: ContentPatch) -> StoreResult<Option<Content>> {
        let content = Content::from_patch(Uuid::new_v4(), patch);
        self.records.write().insert(content.id, content.clone());

        debug!(id = %content.id, title = %content.title, "record created");
        Ok(Some(content))
    }

    async fn read(&self, id: Uuid) -> StoreResult<Option<Content>> {
        Ok(self.records.read().get(&id).cloned())
    }

    async fn read_all(&self) -> StoreResult<Vec<Content>> {
        Ok(self.records.read().values().cloned().collect())
    }

    async fn update(&self, id: Uuid, patch: ContentPatch) -> StoreResult<Option<Content>> {
        let mut records = self.records.write();

        let Some(current) = records.get(&id) else {
            return Ok(None);
        };

        let updated = current.apply(patch);
        records.insert(id, updated.clone());

        debug!(id = %id, "record updated");
        Ok(Some(updated))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<Option<Uuid>> {
        let removed = self.records.write().remove(&id);

        match removed {
            Some(_) => {
                debug!(id = %id, "record deleted");
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_a_fresh_unique_id() {
        let store = MemoryStore::new();

        let a = store
            .create(ContentPatch::new().with_title("Show A"))
            .await
            .unwrap()
            .expect("create should succeed");
        let b = store
            .create(ContentPatch::new().with_title("Show B"))
            .await
            .unwrap()
            .expect("create should succeed");

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn read_returns_the_persisted_record() {
        let store = MemoryStore::new();
        let created = store
            .create(ContentPatch::new().with_title("Show A").with_duration(30))
            .await
            .unwrap()
            .unwrap();

        let read = store.read(created.id).await.unwrap();
        assert_eq!(read, Some(created));
    }

    #[tokio::test]
    async fn read_of_unknown_id_is_absent() {
        let store = MemoryStore::new();
        assert!(store.read(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn read_all_scans_every_record() {
        let store = MemoryStore::new();
        for i in 0..3 {
            store
                .create(ContentPatch::new().with_title(format!("Show {i}")))
                .await
                .unwrap();
        }

        let all = store.read_all().await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn update_patches_only_supplied_fields() {
        let store = MemoryStore::new();
        let created = store
            .create(
                ContentPatch::new()
                    .with_title("Show A")
                    .with_description("original description"),
            )
            .await
            .unwrap()
            .unwrap();

        let updated = store
            .update(created.id, ContentPatch::new().with_title("Show A+"))
            .await
            .unwrap()
            .expect("record exists");

        assert_eq!(updated.title, "Show A+");
        assert_eq!(updated.description, "original description");
        assert_eq!(store.read(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_absent() {
        let store = MemoryStore::new();
        let result = store
            .update(Uuid::new_v4(), ContentPatch::new().with_title("ghost"))
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn delete_returns_the_id_and_drops_the_record() {
        let store = MemoryStore::new();
        let created = store
            .create(ContentPatch::new().with_title("Show A"))
            .await
            .unwrap()
            .unwrap();

        let deleted = store.delete(created.id).await.unwrap();
        assert_eq!(deleted, Some(created.id));
        assert!(store.read(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_absent_and_mutates_nothing() {
        let store = MemoryStore::new();
        store
            .create(ContentPatch::new().with_title("survivor"))
            .await
            .unwrap();

        assert!(store.delete(Uuid::new_v4()).await.unwrap().is_none());
        assert_eq!(store.len(), 1);
    }
}
