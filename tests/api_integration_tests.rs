//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for each endpoint, including the
//! read-through caching behavior behind GET /employees.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use directory_cache::{
    api::create_router,
    cache::{EntryOptions, SingleFlightLoader},
    directory::EmployeeRepository,
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    let state = AppState::new(
        SingleFlightLoader::new(1024),
        EmployeeRepository::seeded(Duration::ZERO),
        EntryOptions::default(),
    );
    create_router(state)
}

/// Builds an app whose state is also returned, for asserting on cache stats.
fn create_test_app_with_state() -> (Router, AppState) {
    let state = AppState::new(
        SingleFlightLoader::new(1024),
        EmployeeRepository::seeded(Duration::ZERO),
        EntryOptions::default(),
    );
    (create_router(state.clone()), state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_employee(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/employees")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// == List Endpoint Tests ==

#[tokio::test]
async fn test_list_endpoint_returns_seeded_roster() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/employees")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    let roster = json.as_array().unwrap();
    assert_eq!(roster.len(), 3);
    assert!(roster.iter().any(|e| e["name"] == "Ada Lovelace"));
}

#[tokio::test]
async fn test_list_endpoint_second_read_is_a_cache_hit() {
    let (app, state) = create_test_app_with_state();

    app.clone()
        .oneshot(get_request("/employees"))
        .await
        .unwrap();
    app.oneshot(get_request("/employees")).await.unwrap();

    let stats = state.cache.store().read().await.stats();
    assert_eq!(stats.loads, 1, "roster should be fetched once");
    assert!(stats.hits >= 1, "second read should be served from cache");
}

// == Single Employee Tests ==

#[tokio::test]
async fn test_get_employee_by_id() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/employees/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"], 2);
    assert_eq!(json["name"], "Grace Hopper");
}

#[tokio::test]
async fn test_get_employee_not_found() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/employees/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

// == Create Endpoint Tests ==

#[tokio::test]
async fn test_create_employee_returns_created() {
    let app = create_test_app();

    let response = app
        .oneshot(post_employee(
            r#"{"name":"Katherine Johnson","department":"Research","email":"katherine@example.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"], "Katherine Johnson");
    assert!(json["id"].as_u64().unwrap() > 3);
}

#[tokio::test]
async fn test_create_employee_invalidates_cached_list() {
    let app = create_test_app();

    // Populate the cache
    app.clone()
        .oneshot(get_request("/employees"))
        .await
        .unwrap();

    app.clone()
        .oneshot(post_employee(
            r#"{"name":"Katherine Johnson","department":"Research","email":"katherine@example.com"}"#,
        ))
        .await
        .unwrap();

    // The next list read must repopulate and include the new employee
    let response = app.oneshot(get_request("/employees")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    let roster = json.as_array().unwrap();
    assert_eq!(roster.len(), 4);
    assert!(roster.iter().any(|e| e["name"] == "Katherine Johnson"));
}

#[tokio::test]
async fn test_create_employee_invalid_body_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(post_employee(
            r#"{"name":"","department":"Research","email":"x@example.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Delete Endpoint Tests ==

#[tokio::test]
async fn test_delete_employee_invalidates_cached_list() {
    let app = create_test_app();

    // Populate the cache
    app.clone()
        .oneshot(get_request("/employees"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/employees/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/employees")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_missing_employee_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/employees/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Stats and Health Tests ==

#[tokio::test]
async fn test_stats_endpoint_reports_cache_counters() {
    let app = create_test_app();

    app.clone()
        .oneshot(get_request("/employees"))
        .await
        .unwrap();
    app.clone()
        .oneshot(get_request("/employees"))
        .await
        .unwrap();

    let response = app.oneshot(get_request("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["loads"], 1);
    assert_eq!(json["resident_entries"], 1);
    assert!(json["hits"].as_u64().unwrap() >= 1);
    assert!(json["hit_rate"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
}
