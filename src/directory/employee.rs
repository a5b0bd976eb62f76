//! Employee Record
//!
//! The domain record served by the directory endpoints and cached as a list.

use serde::{Deserialize, Serialize};

// == Employee ==
/// A single employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, assigned by the repository
    pub id: u32,
    /// Full name
    pub name: String,
    /// Department the employee belongs to
    pub department: String,
    /// Contact email
    pub email: String,
}
