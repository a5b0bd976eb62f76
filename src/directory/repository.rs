//! Employee Repository
//!
//! In-process stand-in for the backing database. Listing the full roster is
//! the expensive operation the cache exists to absorb, so `fetch_all` carries
//! a configurable simulated latency.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::directory::Employee;

// == Employee Repository ==
/// Thread-safe in-memory employee table.
#[derive(Debug)]
pub struct EmployeeRepository {
    /// Backing rows
    rows: RwLock<Vec<Employee>>,
    /// Next identifier to hand out
    next_id: AtomicU32,
    /// Simulated latency of a full-roster fetch
    fetch_delay: Duration,
}

impl EmployeeRepository {
    // == Constructor ==
    /// Creates an empty repository.
    pub fn new(fetch_delay: Duration) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicU32::new(1),
            fetch_delay,
        }
    }

    /// Creates a repository pre-populated with a small starter roster.
    pub fn seeded(fetch_delay: Duration) -> Self {
        let seed = [
            ("Ada Lovelace", "Engineering", "ada@example.com"),
            ("Grace Hopper", "Engineering", "grace@example.com"),
            ("Edith Clarke", "Operations", "edith@example.com"),
        ];
        let rows: Vec<Employee> = seed
            .iter()
            .enumerate()
            .map(|(i, (name, department, email))| Employee {
                id: i as u32 + 1,
                name: name.to_string(),
                department: department.to_string(),
                email: email.to_string(),
            })
            .collect();

        Self {
            next_id: AtomicU32::new(rows.len() as u32 + 1),
            rows: RwLock::new(rows),
            fetch_delay,
        }
    }

    // == Fetch All ==
    /// Returns the full roster, after the simulated backing-store latency.
    pub async fn fetch_all(&self) -> Vec<Employee> {
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
        let rows = self.rows.read().await;
        debug!(count = rows.len(), "fetched full roster from repository");
        rows.clone()
    }

    // == Find ==
    /// Looks up a single employee by id.
    pub async fn find(&self, id: u32) -> Option<Employee> {
        let rows = self.rows.read().await;
        rows.iter().find(|e| e.id == id).cloned()
    }

    // == Insert ==
    /// Adds a new employee, assigning the next free id.
    pub async fn insert(&self, name: String, department: String, email: String) -> Employee {
        let employee = Employee {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name,
            department,
            email,
        };
        self.rows.write().await.push(employee.clone());
        employee
    }

    // == Remove ==
    /// Removes an employee by id. Returns false if no such employee exists.
    pub async fn remove(&self, id: u32) -> bool {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|e| e.id != id);
        rows.len() != before
    }

    // == Length ==
    /// Returns the number of stored employees.
    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}
