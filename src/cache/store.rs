//! Cache Store Module
//!
//! Key-entry table combining lazy expiration with a global size budget.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::Instant;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, EntryOptions};
use crate::error::{Result, ServiceError};

// == Key Validation ==
/// Rejects empty keys; an empty key is a caller bug, not a runtime condition.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ServiceError::InvalidKey(
            "cache key must be non-empty".to_string(),
        ));
    }
    Ok(())
}

// == Cache Store ==
/// In-memory cache with sliding/absolute expiration and a capacity budget.
///
/// The cache is advisory: absence and expiry are reported as `None`, never as
/// errors. An insertion that would overflow the budget is dropped silently
/// and the call still succeeds (reject-new, not evict-old).
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-entry storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Total size budget
    capacity: u64,
    /// Sum of resident entries' size; never exceeds `capacity`
    used_size: u64,
    /// Performance statistics
    stats: CacheStats,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given size budget.
    pub fn new(capacity: u64) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            used_size: 0,
            stats: CacheStats::new(),
        }
    }

    // == Try Get ==
    /// Retrieves a value by key.
    ///
    /// Expiration is validated atomically with the lookup: an expired entry is
    /// purged and reported as absent, so a returned value is never expired at
    /// the instant of the check. A successful lookup refreshes the
    /// sliding-expiration clock.
    pub fn try_get(&mut self, key: &str) -> Result<Option<V>> {
        self.try_get_at(key, Instant::now())
    }

    /// Lookup against an explicit clock reading.
    pub(crate) fn try_get_at(&mut self, key: &str, now: Instant) -> Result<Option<V>> {
        validate_key(key)?;

        if let Entry::Occupied(mut occupied) = self.entries.entry(key.to_string()) {
            if occupied.get().is_expired_at(now) {
                let expired = occupied.remove();
                self.used_size = self.used_size.saturating_sub(expired.size);
                self.stats.record_expiration();
                self.stats.record_miss();
                return Ok(None);
            }

            occupied.get_mut().touch(now);
            self.stats.record_hit();
            return Ok(Some(occupied.get().value.clone()));
        }

        self.stats.record_miss();
        Ok(None)
    }

    // == Set ==
    /// Inserts or replaces an entry.
    ///
    /// If the insertion would push `used_size` over `capacity`, the new entry
    /// is dropped, the store is left unchanged and the call still succeeds.
    /// Replacing an existing entry charges only the size delta.
    pub fn set(&mut self, key: &str, value: V, options: &EntryOptions) -> Result<()> {
        self.set_at(key, value, options, Instant::now())
    }

    /// Insert against an explicit clock reading.
    pub(crate) fn set_at(
        &mut self,
        key: &str,
        value: V,
        options: &EntryOptions,
        now: Instant,
    ) -> Result<()> {
        validate_key(key)?;

        let replaced_size = self.entries.get(key).map(|e| e.size).unwrap_or(0);
        let projected = self.used_size - replaced_size + options.size;
        if projected > self.capacity {
            debug!(
                key,
                size = options.size,
                used_size = self.used_size,
                capacity = self.capacity,
                "entry dropped: size budget exceeded"
            );
            self.stats.record_capacity_rejection();
            return Ok(());
        }

        self.entries
            .insert(key.to_string(), CacheEntry::new_at(value, options, now));
        self.used_size = projected;
        Ok(())
    }

    // == Remove ==
    /// Removes an entry by key. Removing an absent key is not an error.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;

        if let Some(entry) = self.entries.remove(key) {
            self.used_size = self.used_size.saturating_sub(entry.size);
        }
        Ok(())
    }

    // == Record Load ==
    /// Counts a loader execution against the statistics.
    pub(crate) fn record_load(&mut self) {
        self.stats.record_load();
    }

    // == Stats ==
    /// Returns a snapshot of the current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_residency(self.entries.len(), self.used_size);
        stats
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Purely an optimization: lookups validate expiry themselves, so an
    /// expired entry is never observable whether or not a sweep runs.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            if let Some(entry) = self.entries.remove(&key) {
                self.used_size = self.used_size.saturating_sub(entry.size);
                self.stats.record_expiration();
            }
        }

        count
    }

    // == Accessors ==
    /// Returns the current number of resident entries.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total size budget.
    #[allow(dead_code)]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Returns the accounted size of resident entries.
    #[allow(dead_code)]
    pub fn used_size(&self) -> u64 {
        self.used_size
    }
}
