//! # Genre-Set Algebra
//!
//! A record's genre list is an ordered sequence treated as a
//! case-insensitive set: display order is insertion order, but membership
//! tests and de-duplication ignore case. These helpers implement the
//! union and removal operations used by genre edits.

use std::collections::HashSet;

/// Case-insensitive union of `existing` and `added`, preserving order:
/// existing genres first in their original order, then newly-added genres
/// in the order supplied. Duplicates (against either side, or within
/// batches) keep their first occurrence's casing and are otherwise
/// dropped.
pub fn merge(existing: &[String], added: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(existing.len() + added.len());
    let mut merged = Vec::with_capacity(existing.len() + added.len());

    for genre in existing.iter().chain(added.iter()) {
        if seen.insert(genre.to_lowercase()) {
            merged.push(genre.clone());
        }
    }

    merged
}

/// Remove every entry of `existing` that case-insensitively matches any
/// entry of `removed`, preserving the relative order of survivors.
pub fn remove(existing: &[String], removed: &[String]) -> Vec<String> {
    let removed: HashSet<String> = removed.iter().map(|g| g.to_lowercase()).collect();

    existing
        .iter()
        .filter(|g| !removed.contains(&g.to_lowercase()))
        .cloned()
        .collect()
}

/// Check whether `genres` contains an entry case-insensitive-equal to
/// `wanted`.
pub fn contains(genres: &[String], wanted: &str) -> bool {
    let wanted = wanted.to_lowercase();
    genres.iter().any(|g| g.to_lowercase() == wanted)
}
