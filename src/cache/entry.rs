//! Cache Entry Module
//!
//! Defines a single cache entry: an opaque value, its absolute expiry and the
//! tags it can be invalidated by.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A stored value together with its expiry and invalidation tags.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value, never inspected by the cache
    pub value: V,
    /// Insertion timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
    /// Labels used for bulk invalidation
    pub tags: HashSet<String>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl_ms` milliseconds from now.
    ///
    /// The TTL is taken as given; flooring to the minimum happens in the store.
    pub fn new<I, S>(value: V, ttl_ms: u64, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let now = current_timestamp_ms();

        Self {
            value,
            created_at: now,
            expires_at: now.saturating_add(ttl_ms),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// its expiration time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Same as [`is_expired`](Self::is_expired) against a caller-supplied clock reading.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Has Tag ==
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    // == Time To Live ==
    /// Returns the remaining lifetime in milliseconds, `0` once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as `0`.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
