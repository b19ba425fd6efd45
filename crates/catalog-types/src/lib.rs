//! # Catalog Types
//!
//! Shared domain types for the catalog workspace: the [`Content`] record,
//! its partial [`ContentPatch`] representation used by create/update
//! requests, and the genre-set algebra applied by genre edit operations.

pub mod content;
pub mod genres;

pub use content::{Content, ContentPatch};
