//! Single-Flight Loader Module
//!
//! Coordinates concurrent get-or-load requests so at most one loader runs
//! per key at a time; all other callers for that key wait for the in-flight
//! load and then read the freshly populated cache.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::cache::{CacheStore, EntryOptions};
use crate::error::Result;

// == Single-Flight Loader ==
/// Read-through front over a [`CacheStore`] with per-key load coordination.
///
/// Exclusion is keyed by cache key, so a miss on one key never serializes
/// behind a load for an unrelated key. The per-key primitive is a binary
/// `tokio::sync::Mutex`, acquired with an awaitable wait and released by
/// guard drop, so a panic or cancellation during a load cannot leave the
/// key stuck in a loading state. Lock slots are reclaimed once the last
/// caller for the key lets go.
#[derive(Debug)]
pub struct SingleFlightLoader<V> {
    /// Shared entry table; also mutated by `invalidate` without the load lock
    store: Arc<RwLock<CacheStore<V>>>,
    /// Per-key exclusion primitives, created on demand
    key_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<V: Clone> SingleFlightLoader<V> {
    // == Constructor ==
    /// Creates a loader over a fresh store with the given size budget.
    pub fn new(capacity: u64) -> Self {
        Self::with_store(CacheStore::new(capacity))
    }

    /// Creates a loader over an existing store.
    pub fn with_store(store: CacheStore<V>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            key_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Shared handle to the underlying store, for stats and the expiry sweep.
    pub fn store(&self) -> Arc<RwLock<CacheStore<V>>> {
        self.store.clone()
    }

    // == Get Or Load ==
    /// Returns the cached value for `key`, loading it through `loader` on a
    /// miss.
    ///
    /// The fast path returns a fresh cached value without touching the
    /// exclusion primitive. On a miss the caller acquires the key's lock,
    /// re-checks the cache (another caller may have populated it while this
    /// one waited), and only then runs the loader. A successful load is
    /// stored with the given options; a failed load propagates to this
    /// caller and caches nothing, so the next request retries.
    pub async fn get_or_load<F, Fut>(
        &self,
        key: &str,
        options: &EntryOptions,
        loader: F,
    ) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(value) = self.store.write().await.try_get(key)? {
            debug!(key, "cache hit");
            return Ok(value);
        }

        let key_lock = self.key_lock(key).await;
        let result = {
            let _guard = key_lock.lock().await;

            // Bound to a local so the store guard drops before the load path
            // re-locks the store to insert the result.
            let recheck = self.store.write().await.try_get(key);
            match recheck {
                Err(err) => Err(err),
                Ok(Some(value)) => {
                    debug!(key, "cache hit after waiting for in-flight load");
                    Ok(value)
                }
                Ok(None) => {
                    info!(key, "cache miss, loading from backing source");
                    match loader().await {
                        Ok(value) => {
                            let mut store = self.store.write().await;
                            store.record_load();
                            let stored = store.set(key, value.clone(), options);
                            drop(store);
                            info!(key, "load complete");
                            stored.map(|_| value)
                        }
                        Err(err) => Err(err),
                    }
                }
            }
        };
        self.release_key_lock(key, key_lock).await;

        result
    }

    // == Invalidate ==
    /// Removes the entry for `key` immediately.
    ///
    /// Does not trigger a reload; the next `get_or_load` repopulates the key.
    /// Runs against the store directly, without the load-coordination lock,
    /// and always succeeds once the entry is removed. No post-remove re-check
    /// is performed: racing with a concurrent populate can legitimately make
    /// the key reappear, which says nothing about this removal.
    pub async fn invalidate(&self, key: &str) -> Result<()> {
        self.store.write().await.remove(key)?;
        info!(key, "cache entry invalidated");
        Ok(())
    }

    // == Key Lock Management ==
    /// Fetches (or creates) the exclusion primitive for a key.
    async fn key_lock(&self, key: &str) -> Arc<Mutex<()>> {
        let mut locks = self.key_locks.lock().await;
        locks.entry(key.to_string()).or_default().clone()
    }

    /// Returns a key's exclusion primitive, reclaiming the slot when no other
    /// caller holds a handle (the map and this caller account for two).
    async fn release_key_lock(&self, key: &str, lock: Arc<Mutex<()>>) {
        let mut locks = self.key_locks.lock().await;
        if Arc::strong_count(&lock) <= 2 {
            locks.remove(key);
        }
    }
}
