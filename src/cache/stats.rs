//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, loads and
//! capacity rejections.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key absent or expired)
    pub misses: u64,
    /// Number of loader executions that populated the cache
    pub loads: u64,
    /// Number of entries silently dropped because they would overflow the budget
    pub capacity_rejections: u64,
    /// Number of entries removed because they had expired
    pub expirations: u64,
    /// Current number of resident entries
    pub resident_entries: usize,
    /// Sum of resident entries' size, charged against the capacity budget
    pub used_size: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Load ==
    /// Increments the loader-execution counter.
    pub fn record_load(&mut self) {
        self.loads += 1;
    }

    // == Record Capacity Rejection ==
    /// Increments the capacity-rejection counter.
    pub fn record_capacity_rejection(&mut self) {
        self.capacity_rejections += 1;
    }

    // == Record Expiration ==
    /// Increments the expiration counter.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    // == Update Residency ==
    /// Updates the resident entry count and accounted size.
    pub fn set_residency(&mut self, entries: usize, used_size: u64) {
        self.resident_entries = entries;
        self.used_size = used_size;
    }
}
