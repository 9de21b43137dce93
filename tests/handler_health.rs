mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use link_tracker::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let store = common::InMemoryStore::new();
    store.insert_link("abc", "https://example.com");
    let (state, _rx) = common::create_test_state(store);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["click_queue"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (state, _rx) = common::create_test_state(common::InMemoryStore::new());
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("click_queue").is_some());
}

#[tokio::test]
async fn test_health_degraded_when_database_fails() {
    let store = common::InMemoryStore::new();
    store.fail_all();
    let (state, _rx) = common::create_test_state(store);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_health_degraded_when_worker_stopped() {
    let (state, rx) = common::create_test_state(common::InMemoryStore::new());
    drop(rx);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["click_queue"]["status"], "error");
}
