//! Cache Module
//!
//! Read-through in-memory caching with combined sliding/absolute expiration,
//! a capacity budget and single-flight load coordination.

mod entry;
mod single_flight;
mod stats;
mod store;


// Re-export public types
pub use entry::{CacheEntry, CachePriority, EntryOptions};
pub use single_flight::SingleFlightLoader;
pub use stats::CacheStats;
pub use store::CacheStore;
