//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with combined
//! sliding and absolute expiration.

use std::time::{Duration, Instant};

// == Cache Priority ==
/// Eviction-preference hint attached to an entry.
///
/// With the reject-new-on-overflow policy no eviction takes place, so this
/// is metadata only; a future eviction policy would consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePriority {
    Low,
    Normal,
    High,
    NeverRemove,
}

// == Entry Options ==
/// Expiration and accounting parameters applied when an entry is stored.
///
/// Invariant: `absolute_ttl >= sliding_ttl`, otherwise the sliding window
/// can never be exercised before the absolute cutoff.
#[derive(Debug, Clone)]
pub struct EntryOptions {
    /// Entry expires after this long without an access
    pub sliding_ttl: Duration,
    /// Entry expires this long after creation, irrespective of accesses
    pub absolute_ttl: Duration,
    /// Eviction-preference hint
    pub priority: CachePriority,
    /// Cost charged against the store's capacity budget
    pub size: u64,
}

impl Default for EntryOptions {
    fn default() -> Self {
        Self {
            sliding_ttl: Duration::from_secs(60),
            absolute_ttl: Duration::from_secs(300),
            priority: CachePriority::Normal,
            size: 1,
        }
    }
}

// == Cache Entry ==
/// A single cache entry with its value and expiration metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value, owned exclusively by the entry
    pub value: V,
    /// Creation time
    pub created_at: Instant,
    /// Time of the most recent successful lookup
    pub last_accessed_at: Instant,
    /// Inactivity window for sliding expiration
    pub sliding_ttl: Duration,
    /// Fixed deadline after which the entry is dead regardless of accesses
    pub absolute_expires_at: Instant,
    /// Cost charged against the store's capacity budget
    pub size: u64,
    /// Eviction-preference hint
    pub priority: CachePriority,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry from the given options, timestamped now.
    #[allow(dead_code)]
    pub fn new(value: V, options: &EntryOptions) -> Self {
        Self::new_at(value, options, Instant::now())
    }

    /// Creates a new cache entry timestamped at `now`.
    pub(crate) fn new_at(value: V, options: &EntryOptions, now: Instant) -> Self {
        debug_assert!(
            options.absolute_ttl >= options.sliding_ttl,
            "absolute TTL must not be shorter than the sliding TTL"
        );
        Self {
            value,
            created_at: now,
            last_accessed_at: now,
            sliding_ttl: options.sliding_ttl,
            absolute_expires_at: now + options.absolute_ttl,
            size: options.size,
            priority: options.priority,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once either clock runs out:
    /// - sliding: more than `sliding_ttl` has passed since the last access
    /// - absolute: `absolute_expires_at` has passed, no matter how recently
    ///   the entry was accessed
    #[allow(dead_code)]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Expiration check against an explicit clock reading.
    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        if now > self.absolute_expires_at {
            return true;
        }
        now.duration_since(self.last_accessed_at) > self.sliding_ttl
    }

    // == Touch ==
    /// Refreshes the sliding-expiration clock after a successful lookup.
    pub(crate) fn touch(&mut self, now: Instant) {
        self.last_accessed_at = now;
    }

    // == Remaining Lifetime ==
    /// Time left before the entry expires, taking the nearer of the two
    /// deadlines. Returns zero if already expired.
    #[allow(dead_code)]
    pub fn remaining_at(&self, now: Instant) -> Duration {
        if self.is_expired_at(now) {
            return Duration::ZERO;
        }
        let sliding_deadline = self.last_accessed_at + self.sliding_ttl;
        let deadline = sliding_deadline.min(self.absolute_expires_at);
        deadline.duration_since(now)
    }
}
