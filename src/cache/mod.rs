//! Cache Module
//!
//! In-memory caching with TTL expiration, tag invalidation and
//! insertion-order eviction.

mod entry;
mod order;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::{SetOptions, TtlCache};

// == Public Constants ==
/// Shortest lifetime any entry can have, in milliseconds
pub const MIN_TTL_MS: u64 = 1_000;

/// Smallest capacity a cache can be configured with
pub const MIN_ENTRIES: usize = 1;
