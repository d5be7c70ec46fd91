//! Shared Cache Module
//!
//! A cloneable, thread-safe handle to one [`TtlCache`] instance.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, SetOptions, TtlCache};

// == Shared Cache ==
/// Process-wide handle to a single cache.
///
/// Clones share the same instance. Every method holds one mutex for its whole
/// body, since even `get` may mutate the store when it drops an expired entry.
pub struct SharedCache<V> {
    inner: Arc<Mutex<TtlCache<V>>>,
    default_ttl_ms: u64,
    max_entries: usize,
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            default_ttl_ms: self.default_ttl_ms,
            max_entries: self.max_entries,
        }
    }
}

impl<V> From<TtlCache<V>> for SharedCache<V> {
    fn from(cache: TtlCache<V>) -> Self {
        Self {
            default_ttl_ms: cache.default_ttl_ms(),
            max_entries: cache.max_entries(),
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}

impl<V> SharedCache<V> {
    /// Effective default TTL after clamping; fixed for the cache's lifetime.
    pub fn default_ttl_ms(&self) -> u64 {
        self.default_ttl_ms
    }

    /// Effective capacity after clamping; fixed for the cache's lifetime.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

impl<V: Clone> SharedCache<V> {
    /// Creates a shared cache with the same clamping rules as [`TtlCache::new`].
    pub fn new(default_ttl_ms: u64, max_entries: usize) -> Self {
        TtlCache::new(default_ttl_ms, max_entries).into()
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.lock().await.get(key).cloned()
    }

    pub async fn set(&self, key: impl Into<String>, value: V, options: SetOptions) {
        self.inner.lock().await.set(key, value, options);
    }

    pub async fn delete(&self, key: &str) {
        self.inner.lock().await.delete(key);
    }

    pub async fn clear(&self) -> usize {
        self.inner.lock().await.clear()
    }

    pub async fn invalidate_tag(&self, tag: &str) -> usize {
        self.inner.lock().await.invalidate_tag(tag)
    }

    pub async fn purge_expired(&self) -> usize {
        self.inner.lock().await.purge_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    // == Get Or Fetch ==
    /// Read-through lookup in front of a slower upstream source.
    ///
    /// On a hit the cached value is returned. On a miss the lock is released,
    /// `fetch` is awaited, and a successful result is stored with `options`
    /// before being returned. Errors are passed through and never cached.
    /// Concurrent misses on the same key each call `fetch`.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        key: &str,
        options: SetOptions,
        fetch: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key).await {
            return Ok(value);
        }

        debug!(key, "cache miss, fetching from upstream");
        let value = fetch().await?;
        self.set(key, value.clone(), options).await;
        Ok(value)
    }
}
