//! # Catalog Cache
//!
//! This crate provides the process-local cache-aside layer that absorbs
//! read traffic in front of the durable store.
//!
//! ## Features
//!
//! - Generic [`SlidingCache`] keyed by a flat string namespace
//! - Get-or-populate primitive with exactly-once producer invocation
//! - Per-entry sliding expiration (default 90 seconds, per-call override)
//! - Deterministic cache-key derivation for point and filtered lookups
//!
//! The cache is advisory, not authoritative: the store remains the single
//! source of truth, and writers are expected to push fresh values in
//! (write-through) or evict stale keys after every store write.

mod key;
mod sliding;

pub use key::{point_key, query_key};
pub use sliding::{DEFAULT_TTL, SlidingCache};
