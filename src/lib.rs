//! Directory Cache - An employee directory service with a read-through cache
//!
//! Serves an employee roster over HTTP, caching the expensive full-list read
//! behind single-flight load coordination with combined sliding/absolute
//! expiration and a capacity budget.

pub mod api;
pub mod cache;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::{AppState, EMPLOYEE_LIST_KEY};
pub use config::Config;
pub use tasks::spawn_sweep_task;
