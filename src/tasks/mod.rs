//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweep: removes expired cache entries at configured intervals.
//!   Lookups validate expiry themselves, so the sweep only reclaims memory
//!   earlier; observable cache behavior is unchanged.

mod sweep;

pub use sweep::spawn_sweep_task;
