//! # Catalog Store
//!
//! The keyed persistence contract for catalog records, plus the in-memory
//! backend used as a fixture and default engine. Any backend satisfying
//! [`ContentStore`] is interchangeable; callers must not assume anything
//! about durability, transactionality, or latency beyond "eventually
//! completes or fails".

mod memory;
mod store;

pub use memory::MemoryStore;
pub use store::{ContentStore, StoreError, StoreResult};
