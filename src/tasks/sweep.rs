//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries so that
//! keys nobody reads again do not linger until evicted. Reads already ignore
//! expired entries, so the sweep only reclaims memory.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a task that calls [`SharedCache::purge_expired`] every `interval`.
///
/// The returned handle is aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::<serde_json::Value>::new(60_000, 500);
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(30));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<V>(cache: SharedCache<V>, interval: Duration) -> JoinHandle<()>
where
    V: Clone + Send + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired().await;
            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SetOptions;

    #[tokio::test]
    async fn test_sweep_removes_expired_entries() {
        let cache = SharedCache::new(60_000, 100);
        cache
            .set("expire_soon", 1, SetOptions::new().with_ttl_ms(1_000))
            .await;

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(500));

        tokio::time::sleep(Duration::from_millis(1800)).await;

        assert!(cache.is_empty().await, "Expired entry should have been swept");
        assert_eq!(cache.stats().await.expirations, 1);
        assert_eq!(cache.stats().await.misses, 0);

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_preserves_live_entries() {
        let cache = SharedCache::new(60_000, 100);
        cache
            .set("long_lived", 1, SetOptions::new().with_ttl_ms(3_600_000))
            .await;

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(200));

        tokio::time::sleep(Duration::from_millis(700)).await;

        assert_eq!(cache.get("long_lived").await, Some(1));

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache: SharedCache<i32> = SharedCache::new(60_000, 100);

        let handle = spawn_sweep_task(cache, Duration::from_secs(1));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
