//! Directory Module
//!
//! The employee records and the backing repository the cache reads through.

mod employee;
mod repository;

// Re-export public types
pub use employee::Employee;
pub use repository::EmployeeRepository;
