//! # Catalog Engine
//!
//! Content-management orchestration for the catalog: CRUD over a keyed
//! store, genre-set edits serialized per record, and substring/exact
//! filtering. The engine sits between a transport boundary (which owns
//! cache-key construction and write-through) and a [`ContentStore`]
//! backend.
//!
//! ## Features
//!
//! - [`ContentManager`] translating catalog intents into store operations
//! - Per-id serialization of genre edits (no lost updates)
//! - Case-insensitive title-substring and genre-exact filtering
//! - Re-exports of the workspace's cache and store primitives

mod error;
mod manager;

pub use error::CatalogError;
pub use manager::ContentManager;

// Re-export the rest of the core surface so the calling layer can depend
// on this crate alone.
pub use catalog_cache::{DEFAULT_TTL, SlidingCache, point_key, query_key};
pub use catalog_store::{ContentStore, MemoryStore, StoreError, StoreResult};
pub use catalog_types::{Content, ContentPatch, genres};
