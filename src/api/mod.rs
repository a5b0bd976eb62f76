//! API Module
//!
//! HTTP handlers and routing for the directory service REST API.
//!
//! # Endpoints
//! - `GET /employees` - List all employees (served through the cache)
//! - `POST /employees` - Add an employee (invalidates the cached list)
//! - `GET /employees/:id` - Fetch a single employee
//! - `DELETE /employees/:id` - Remove an employee (invalidates the cached list)
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, EMPLOYEE_LIST_KEY};
pub use routes::create_router;
