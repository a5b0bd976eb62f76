//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires a write lock on the store only for the
/// duration of each sweep. An expired entry is never observable either way,
/// because lookups validate expiration themselves; the sweep just frees the
/// budget sooner.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task<V>(
    store: Arc<RwLock<CacheStore<V>>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and drop expired entries
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.sweep_expired()
            };

            // Log sweep statistics
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
    use crate::cache::EntryOptions;

    fn short_options(ttl_ms: u64) -> EntryOptions {
        EntryOptions {
            sliding_ttl: Duration::from_millis(ttl_ms),
            absolute_ttl: Duration::from_millis(ttl_ms),
            ..EntryOptions::default()
        }
    }

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new(1024)));

        // Add an entry with a very short TTL
        {
            let mut store_guard = store.write().await;
            store_guard
                .set("expire_soon", "value".to_string(), &short_options(100))
                .unwrap();
        }

        // Spawn sweep task with 1 second interval
        let handle = spawn_sweep_task(store.clone(), 1);

        // Wait for the entry to expire and the sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        {
            let store_guard = store.read().await;
            assert!(
                store_guard.is_empty(),
                "Expired entry should have been swept"
            );
            assert_eq!(store_guard.used_size(), 0);
        }

        // Abort the sweep task
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_valid_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new(1024)));

        // Add an entry with a long TTL
        {
            let mut store_guard = store.write().await;
            store_guard
                .set("long_lived", "value".to_string(), &EntryOptions::default())
                .unwrap();
        }

        // Spawn sweep task
        let handle = spawn_sweep_task(store.clone(), 1);

        // Wait for a sweep to run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut store_guard = store.write().await;
            let value = store_guard.try_get("long_lived").unwrap();
            assert_eq!(value, Some("value".to_string()));
        }

        // Abort the sweep task
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let store: Arc<RwLock<CacheStore<String>>> = Arc::new(RwLock::new(CacheStore::new(1024)));

        let handle = spawn_sweep_task(store, 1);

        // Abort immediately
        handle.abort();

        // Wait a bit and verify the task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
