//! # Cache Key Derivation
//!
//! Keys live in a single flat string namespace, so derivation has to be
//! deterministic (identical logical queries always produce the same key)
//! and collision-free (distinct logical queries never share one). Filter
//! values are length-prefixed so that no arrangement of field contents
//! can run together into another query's key.

use uuid::Uuid;

/// Key for a point lookup of a single record.
pub fn point_key(id: Uuid) -> String {
    format!("contents/{id}")
}

/// Key for a filtered list lookup.
///
/// Filter values are trimmed and lowercased before encoding, matching the
/// case-insensitive filter semantics: queries that are observably
/// identical hash to the same key. Blank filters are omitted entirely,
/// the same way the filter operation ignores them.
pub fn query_key(title: Option<&str>, genre: Option<&str>) -> String {
    let mut key = String::from("contents/filtered");

    for (field, value) in [("title", title), ("genre", genre)] {
        let normalized = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_lowercase);

        if let Some(v) = normalized {
            key.push_str(&format!(";{field}={}:{v}", v.len()));
        }
    }

    key
}
