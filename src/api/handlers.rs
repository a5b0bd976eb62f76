//! API Handlers
//!
//! HTTP request handlers for each directory service endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::cache::{EntryOptions, SingleFlightLoader};
use crate::config::Config;
use crate::directory::{Employee, EmployeeRepository};
use crate::error::{Result, ServiceError};
use crate::models::{CreateEmployeeRequest, DeleteResponse, HealthResponse, StatsResponse};

/// Cache key under which the full employee list is stored.
pub const EMPLOYEE_LIST_KEY: &str = "employee_list";

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-through cache in front of the repository
    pub cache: Arc<SingleFlightLoader<Vec<Employee>>>,
    /// Backing employee table
    pub directory: Arc<EmployeeRepository>,
    /// Expiration/accounting options applied to the cached list
    pub entry_options: EntryOptions,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        cache: SingleFlightLoader<Vec<Employee>>,
        directory: EmployeeRepository,
        entry_options: EntryOptions,
    ) -> Self {
        Self {
            cache: Arc::new(cache),
            directory: Arc::new(directory),
            entry_options,
        }
    }

    /// Creates a new AppState from configuration, with a seeded repository.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            SingleFlightLoader::new(config.cache_capacity),
            EmployeeRepository::seeded(Duration::from_millis(config.fetch_delay_ms)),
            config.entry_options(),
        )
    }
}

/// Handler for GET /employees
///
/// Serves the full roster through the read-through cache. Concurrent misses
/// for the list trigger a single repository fetch.
pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>> {
    debug!("fetching employee list through cache");

    let directory = state.directory.clone();
    let employees = state
        .cache
        .get_or_load(EMPLOYEE_LIST_KEY, &state.entry_options, move || async move {
            Ok(directory.fetch_all().await)
        })
        .await?;

    Ok(Json(employees))
}

/// Handler for GET /employees/:id
///
/// Single-record reads go straight to the repository; only the full list is
/// cached.
pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Employee>> {
    match state.directory.find(id).await {
        Some(employee) => Ok(Json(employee)),
        None => Err(ServiceError::NotFound(format!("employee {}", id))),
    }
}

/// Handler for POST /employees
///
/// Adds the employee, then invalidates the cached list so the next read
/// repopulates it from the repository.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let employee = state
        .directory
        .insert(req.name, req.department, req.email)
        .await;
    state.cache.invalidate(EMPLOYEE_LIST_KEY).await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for DELETE /employees/:id
///
/// Removes the employee and invalidates the cached list.
pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<DeleteResponse>> {
    if !state.directory.remove(id).await {
        return Err(ServiceError::NotFound(format!("employee {}", id)));
    }
    state.cache.invalidate(EMPLOYEE_LIST_KEY).await?;

    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.cache.store();
    let stats = store.read().await.stats();

    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
