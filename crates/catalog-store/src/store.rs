//! # Store Contract
//!
//! This module defines the trait every persistence backend must follow.

use async_trait::async_trait;
use catalog_types::{Content, ContentPatch};
use uuid::Uuid;

/// Errors raised by a persistence backend.
///
/// Expected outcomes (an id with no record, a patch on a missing row) are
/// `Option`-shaped return values, not errors; only genuine infrastructure
/// faults surface here.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result of a store operation
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A keyed persistence backend holding catalog records.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Persist a new record built from `patch` under a freshly assigned
    /// id. Returns `None` when the backend rejects the write.
    async fn create(&self, patch: ContentPatch) -> StoreResult<Option<Content>>;

    /// Point read; `None` when no record has this id.
    async fn read(&self, id: Uuid) -> StoreResult<Option<Content>>;

    /// Full scan of every record.
    async fn read_all(&self) -> StoreResult<Vec<Content>>;

    /// Apply `patch` to the record under `id` and persist the result;
    /// `None` when the id is absent.
    async fn update(&self, id: Uuid, patch: ContentPatch) -> StoreResult<Option<Content>>;

    /// Remove the record under `id`. Returns `Some(id)` on success and
    /// `None` when there was nothing to remove.
    async fn delete(&self, id: Uuid) -> StoreResult<Option<Uuid>>;
}
