//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{CachePriority, EntryOptions};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Total size budget of the cache store
    pub cache_capacity: u64,
    /// Sliding TTL in seconds applied to the cached list
    pub sliding_ttl_secs: u64,
    /// Absolute TTL in seconds applied to the cached list
    pub absolute_ttl_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background expiry-sweep interval in seconds
    pub sweep_interval: u64,
    /// Simulated backing-store fetch latency in milliseconds
    pub fetch_delay_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Cache size budget (default: 1024)
    /// - `SLIDING_TTL` - Sliding TTL in seconds (default: 60)
    /// - `ABSOLUTE_TTL` - Absolute TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Expiry sweep frequency in seconds (default: 30)
    /// - `FETCH_DELAY_MS` - Simulated repository latency (default: 150)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024),
            sliding_ttl_secs: env::var("SLIDING_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            absolute_ttl_secs: env::var("ABSOLUTE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            fetch_delay_ms: env::var("FETCH_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(150),
        }
    }

    /// Builds the entry options applied to the cached employee list.
    ///
    /// The absolute TTL is clamped to at least the sliding TTL so the sliding
    /// window can always be exercised before the absolute cutoff.
    pub fn entry_options(&self) -> EntryOptions {
        EntryOptions {
            sliding_ttl: Duration::from_secs(self.sliding_ttl_secs),
            absolute_ttl: Duration::from_secs(self.absolute_ttl_secs.max(self.sliding_ttl_secs)),
            priority: CachePriority::Normal,
            size: 1,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 1024,
            sliding_ttl_secs: 60,
            absolute_ttl_secs: 300,
            server_port: 3000,
            sweep_interval: 30,
            fetch_delay_ms: 150,
        }
    }
}
