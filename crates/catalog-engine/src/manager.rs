//! # Content Manager
//!
//! Translates catalog intents into store operations. Owns the genre-set
//! edit semantics and the substring/exact filter pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Mutex as AsyncMutex;
use tracing::debug;
use uuid::Uuid;

use catalog_store::ContentStore;
use catalog_types::{Content, ContentPatch, genres};

use crate::error::CatalogError;

/// Orchestrates CRUD and genre-set edits over a [`ContentStore`].
///
/// Genre edits are read-modify-write sequences, so the manager serializes
/// them per record id through a keyed async mutex: two concurrent edits of
/// the same record run one after the other and neither update is lost.
/// Edits of distinct records do not contend.
pub struct ContentManager<S> {
    store: S,
    edit_locks: Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>,
}

impl<S: ContentStore> ContentManager<S> {
    /// Create a manager over `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            edit_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Full scan of every record, unfiltered.
    #[deprecated(note = "use `get_filtered` instead")]
    pub async fn get_many(&self) -> Result<Vec<Content>, CatalogError> {
        Ok(self.store.read_all().await?)
    }

    /// Full scan narrowed by optional filters, composed conjunctively:
    /// a non-blank `title` keeps records whose title contains it as a
    /// case-insensitive substring, a non-blank `genre` keeps records
    /// whose genre list holds a case-insensitive-equal entry.
    ///
    /// An empty catalog and a catalog with no matches both yield an empty
    /// vec; callers that need to tell them apart must ask the store.
    pub async fn get_filtered(
        &self,
        title: Option<&str>,
        genre: Option<&str>,
    ) -> Result<Vec<Content>, CatalogError> {
        let records = self.store.read_all().await?;

        let title = normalize_filter(title);
        let genre = normalize_filter(genre);

        let filtered = records
            .into_iter()
            .filter(|c| {
                title
                    .as_deref()
                    .is_none_or(|t| c.title.to_lowercase().contains(t))
            })
            .filter(|c| {
                genre
                    .as_deref()
                    .is_none_or(|g| genres::contains(&c.genre_list, g))
            })
            .collect();

        Ok(filtered)
    }

    /// Create a record from `patch` under a freshly assigned id.
    /// `None` signals that the store rejected the write.
    pub async fn create(&self, patch: ContentPatch) -> Result<Option<Content>, CatalogError> {
        Ok(self.store.create(patch).await?)
    }

    /// Point lookup; `None` when no record has this id.
    pub async fn get(&self, id: Uuid) -> Result<Option<Content>, CatalogError> {
        Ok(self.store.read(id).await?)
    }

    /// Patch the record under `id`; `None` when the id is absent.
    pub async fn update(
        &self,
        id: Uuid,
        patch: ContentPatch,
    ) -> Result<Option<Content>, CatalogError> {
        Ok(self.store.update(id, patch).await?)
    }

    /// Remove the record under `id`. Returns `Some(id)` on success and
    /// `None` when the id did not exist; an unknown id never mutates the
    /// store.
    pub async fn delete(&self, id: Uuid) -> Result<Option<Uuid>, CatalogError> {
        let deleted = self.store.delete(id).await?;

        if deleted.is_some() {
            // The record is gone; its edit lock can go with it.
            self.edit_locks.lock().remove(&id);
        }

        Ok(deleted)
    }

    /// Merge `genres` into the record's genre list: existing genres keep
    /// their original order, new unique genres are appended in the order
    /// supplied, and case-insensitive duplicates are skipped. `None` when
    /// the id is absent.
    pub async fn add_genres(
        &self,
        id: Uuid,
        genres_to_add: &[String],
    ) -> Result<Option<Content>, CatalogError> {
        let lock = self.edit_lock(id);
        let _guard = lock.lock().await;

        let Some(current) = self.store.read(id).await? else {
            // No record, nothing to serialize: drop the lock entry so
            // probes of unknown ids cannot grow the registry forever.
            self.edit_locks.lock().remove(&id);
            return Ok(None);
        };

        let merged = genres::merge(&current.genre_list, genres_to_add);
        debug!(id = %id, added = genres_to_add.len(), total = merged.len(), "merging genres");

        let patch = ContentPatch {
            genre_list: Some(merged),
            ..ContentPatch::default()
        };
        Ok(self.store.update(id, patch).await?)
    }

    /// Drop every genre-list entry that case-insensitively matches one of
    /// `genres`, preserving the relative order of survivors. `None` when
    /// the id is absent.
    pub async fn remove_genres(
        &self,
        id: Uuid,
        genres_to_remove: &[String],
    ) -> Result<Option<Content>, CatalogError> {
        let lock = self.edit_lock(id);
        let _guard = lock.lock().await;

        let Some(current) = self.store.read(id).await? else {
            self.edit_locks.lock().remove(&id);
            return Ok(None);
        };

        let remaining = genres::remove(&current.genre_list, genres_to_remove);
        debug!(id = %id, remaining = remaining.len(), "removing genres");

        let patch = ContentPatch {
            genre_list: Some(remaining),
            ..ContentPatch::default()
        };
        Ok(self.store.update(id, patch).await?)
    }

    /// Fetch (or lazily create) the serialization point for edits of `id`.
    fn edit_lock(&self, id: Uuid) -> Arc<AsyncMutex<()>> {
        self.edit_locks.lock().entry(id).or_default().clone()
    }
}

/// Trim and lowercase a filter value; blank filters count as absent.
fn normalize_filter(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}
