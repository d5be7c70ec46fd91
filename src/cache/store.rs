//! Cache Store Module
//!
//! The core cache engine: HashMap storage with per-entry expiry, tag-based
//! invalidation and insertion-order capacity eviction.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, InsertionOrder, MIN_ENTRIES, MIN_TTL_MS};

// == Set Options ==
/// Per-entry options accepted by [`TtlCache::set`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Lifetime for this entry only; the cache default applies when `None`
    pub ttl_ms: Option<u64>,
    /// Invalidation labels; duplicates collapse into one
    pub tags: Vec<String>,
}

impl SetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = Some(ttl_ms);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

// == TTL Cache ==
/// Bounded, self-expiring key/value cache with tag invalidation.
///
/// Every operation is total: a missing key is a normal outcome and bad
/// configuration is clamped, never rejected. Expired entries stay resident
/// until a read, [`purge_expired`](Self::purge_expired) or eviction removes
/// them, so [`len`](Self::len) may count entries that `get` reports absent.
///
/// Eviction is by insertion order only. Reads do not refresh an entry's
/// position and overwriting a key keeps the position it was first inserted at.
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    order: InsertionOrder,
    stats: CacheStats,
    default_ttl_ms: u64,
    max_entries: usize,
}

impl<V> TtlCache<V> {
    // == Constructor ==
    /// Creates a cache, clamping `default_ttl_ms` to at least [`MIN_TTL_MS`]
    /// and `max_entries` to at least [`MIN_ENTRIES`].
    pub fn new(default_ttl_ms: u64, max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            default_ttl_ms: default_ttl_ms.max(MIN_TTL_MS),
            max_entries: max_entries.max(MIN_ENTRIES),
        }
    }

    // == Get ==
    /// Returns the live value stored under `key`.
    ///
    /// An entry whose expiry has been reached is removed and reported absent.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(current_timestamp_ms()),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.remove_entry(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and its tags.
    ///
    /// The entry lives for `options.ttl_ms` (or the default), floored at
    /// [`MIN_TTL_MS`]. Afterwards the oldest inserted entries are evicted
    /// until the cache is back within `max_entries`.
    pub fn set(&mut self, key: impl Into<String>, value: V, options: SetOptions) {
        let key = key.into();
        let ttl_ms = options
            .ttl_ms
            .unwrap_or(self.default_ttl_ms)
            .max(MIN_TTL_MS);

        let entry = CacheEntry::new(value, ttl_ms, options.tags);
        if self.entries.insert(key.clone(), entry).is_none() {
            self.order.record(&key);
        }

        self.evict_overflow();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes the entry for `key`; a no-op if there is none.
    pub fn delete(&mut self, key: &str) {
        self.remove_entry(key);
    }

    // == Clear ==
    /// Removes every entry, returning how many were resident.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
        removed
    }

    // == Invalidate Tag ==
    /// Removes every entry carrying `tag`, expired or not, and returns the count.
    pub fn invalidate_tag(&mut self, tag: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.has_tag(tag));
        let removed = before - self.entries.len();

        if removed > 0 {
            let entries = &self.entries;
            self.order.retain(|key| entries.contains_key(key));
            self.stats.record_invalidations(removed);
            self.stats.set_total_entries(self.entries.len());
        }

        debug!(tag, removed, "invalidated cache tag");
        removed
    }

    // == Purge Expired ==
    /// Removes all expired entries and returns how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - self.entries.len();

        if removed > 0 {
            let entries = &self.entries;
            self.order.retain(|key| entries.contains_key(key));
            self.stats.record_expirations(removed);
            self.stats.set_total_entries(self.entries.len());
        }

        removed
    }

    // == Contains Key ==
    /// Reports whether `key` holds a live entry, without touching stats or storage.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired())
    }

    // == TTL Remaining ==
    /// Remaining lifetime of a live entry in milliseconds.
    pub fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(CacheEntry::ttl_remaining_ms)
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Accessors ==
    /// Number of resident entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn default_ttl_ms(&self) -> u64 {
        self.default_ttl_ms
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    // == Internal Helpers ==
    fn remove_entry(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            self.stats.set_total_entries(self.entries.len());
            true
        } else {
            false
        }
    }

    fn evict_overflow(&mut self) {
        while self.entries.len() > self.max_entries {
            let Some(oldest) = self.order.pop_oldest() else {
                break;
            };
            if self.entries.remove(&oldest).is_some() {
                self.stats.record_eviction();
                debug!(key = %oldest, "evicted oldest cache entry");
            }
        }
    }
}
