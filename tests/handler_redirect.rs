mod common;

use axum_test::TestServer;
use link_tracker::routes::router;

#[tokio::test]
async fn test_redirect_success() {
    let store = common::InMemoryStore::new();
    store.insert_link("abc", "https://example.com/target");
    let (state, _rx) = common::create_test_state(store);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/abc").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_queues_click_event() {
    let store = common::InMemoryStore::new();
    let link_id = store.insert_link("abc", "https://example.com");
    let (state, mut rx) = common::create_test_state(store);
    let server = TestServer::new(router(state)).unwrap();

    server.get("/abc").await;

    let event = rx.try_recv().expect("click event should be queued");
    assert_eq!(event.link_id, link_id);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_not_found_records_nothing() {
    let store = common::InMemoryStore::new();
    let (state, mut rx) = common::create_test_state(store);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_succeeds_when_queue_full() {
    let store = common::InMemoryStore::new();
    store.insert_link("abc", "https://example.com");
    let (state, mut rx) = common::create_test_state_with(store, chrono_tz::Tz::UTC, 1);
    let server = TestServer::new(router(state)).unwrap();

    for _ in 0..3 {
        let response = server.get("/abc").await;
        assert_eq!(response.status_code(), 302);
    }

    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_succeeds_when_worker_gone() {
    let store = common::InMemoryStore::new();
    store.insert_link("abc", "https://example.com");
    let (state, rx) = common::create_test_state(store);
    drop(rx);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/abc").await;

    assert_eq!(response.status_code(), 302);
}

#[tokio::test]
async fn test_redirect_lookup_error() {
    let store = common::InMemoryStore::new();
    store.insert_link("abc", "https://example.com");
    store.fail_all();
    let (state, mut rx) = common::create_test_state(store);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/abc").await;

    assert_eq!(response.status_code(), 500);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_percent_encodes_destination() {
    let store = common::InMemoryStore::new();
    store.insert_link("cafe", "https://example.com/café menu");
    let (state, _rx) = common::create_test_state(store);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/cafe").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://example.com/caf%C3%A9%20menu"
    );
}

#[tokio::test]
async fn test_redirect_with_control_character_destination() {
    let store = common::InMemoryStore::new();
    store.insert_link("ctl", "https://example.com/a\nb");
    let (state, mut rx) = common::create_test_state(store);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/ctl").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/a%0Ab");
    assert!(rx.try_recv().is_ok());
}
