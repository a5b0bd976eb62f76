//! Request DTOs for the directory API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for creating an employee (POST /employees)
///
/// # Fields
/// - `name`: Full name of the employee
/// - `department`: Department the employee belongs to
/// - `email`: Contact email
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Full name
    pub name: String,
    /// Department
    pub department: String,
    /// Contact email
    pub email: String,
}

impl CreateEmployeeRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if self.department.trim().is_empty() {
            return Some("Department cannot be empty".to_string());
        }
        if !self.email.contains('@') {
            return Some("Email must contain '@'".to_string());
        }
        None
    }
}
