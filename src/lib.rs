//! tagcache - an in-process TTL cache with tag-based invalidation
//!
//! Shields a slow upstream source from repeated identical requests. Entries
//! expire lazily, capacity is enforced by insertion-order eviction, and groups
//! of related entries can be dropped at once by tag.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{SetOptions, SharedCache, TtlCache};
pub use config::Config;
pub use tasks::spawn_sweep_task;
