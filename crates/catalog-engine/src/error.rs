use catalog_store::StoreError;

/// Errors surfaced by catalog operations.
///
/// Expected outcomes (missing ids, empty filter results, rejected writes)
/// are `Option`-shaped return values; only infrastructure faults from the
/// backing store arrive here.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
