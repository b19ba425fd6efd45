//! # Sliding Cache
//!
//! String-keyed memoization with per-entry sliding expiration, backed by
//! Moka. Each successful read of a live entry restarts its expiration
//! window; an entry left untouched for longer than its window is treated
//! as a miss on the next access.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::Expiry;
use moka::future::Cache as MokaCache;
use tracing::debug;

/// Expiration window applied when a call does not override it.
pub const DEFAULT_TTL: Duration = Duration::from_secs(90);

/// Entry in the sliding cache
#[derive(Clone)]
struct CacheEntry<T> {
    /// Cached payload
    value: T,
    /// This entry's expiration window
    ttl: Duration,
}

/// Expiry policy that re-arms an entry's own window on every create,
/// read, and update, which is what makes the expiration sliding rather
/// than insertion-anchored.
struct PerEntryTtl;

impl<T> Expiry<String, CacheEntry<T>> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CacheEntry<T>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_read(
        &self,
        _key: &String,
        value: &CacheEntry<T>,
        _read_at: Instant,
        _duration_until_expiry: Option<Duration>,
        _last_modified_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CacheEntry<T>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Process-local cache-aside primitive.
///
/// Values live under a single flat string key namespace; the caller is
/// responsible for key construction (see [`crate::point_key`] and
/// [`crate::query_key`]) and for keeping distinct logical queries from
/// colliding. A cached `None`-shaped payload is a normal value: a cached
/// "not found" still counts as a hit until it expires.
#[derive(Clone)]
pub struct SlidingCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    inner: MokaCache<String, CacheEntry<T>>,
    default_ttl: Duration,
}

impl<T> SlidingCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a cache with the default 90-second expiration window.
    pub fn new() -> Self {
        Self::with_default_ttl(DEFAULT_TTL)
    }

    /// Create a cache whose unspecified-TTL entries use `default_ttl`.
    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        let inner = MokaCache::builder().expire_after(PerEntryTtl).build();
        Self { inner, default_ttl }
    }

    /// Get the value under `key`, populating it on a miss.
    ///
    /// On a hit the stored value is returned and `produce` is never
    /// polled. On a miss `produce` runs exactly once, even across
    /// concurrent callers for the same key: Moka coalesces the waiters
    /// onto a single producer invocation and hands its result to all of
    /// them. A failed producer stores nothing (no negative caching) and
    /// the error is shared with every waiting caller.
    pub async fn get_or_set<Fut, E>(
        &self,
        key: &str,
        produce: Fut,
        ttl: Option<Duration>,
    ) -> Result<T, Arc<E>>
    where
        Fut: Future<Output = Result<T, E>>,
        E: Send + Sync + 'static,
    {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let entry = self
            .inner
            .try_get_with(key.to_owned(), async move {
                let value = produce.await?;
                debug!(key = %key, ttl = ?ttl, "cache miss, storing produced value");
                Ok(CacheEntry { value, ttl })
            })
            .await?;

        Ok(entry.value)
    }

    /// Unconditionally insert or overwrite the entry for `key`, resetting
    /// its expiration clock. This is the write-through hook used after a
    /// successful store write.
    pub async fn set(&self, key: &str, value: T, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        self.inner
            .insert(key.to_owned(), CacheEntry { value, ttl })
            .await;
        debug!(key = %key, ttl = ?ttl, "cache entry set");
    }

    /// Evict the entry for `key` if present; silently does nothing when
    /// the key is absent.
    pub async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
        debug!(key = %key, "cache entry removed");
    }

    /// Probe for a live entry without populating on miss. Reading a live
    /// entry slides its expiration like any other access.
    pub async fn get(&self, key: &str) -> Option<T> {
        self.inner.get(key).await.map(|entry| entry.value)
    }
}

impl<T> Default for SlidingCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
