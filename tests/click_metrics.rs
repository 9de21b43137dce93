mod common;

use axum_test::TestServer;
use link_tracker::application::click_worker::run_click_worker;
use link_tracker::domain::click_event::ClickEvent;
use link_tracker::routes::router;
use link_tracker::telemetry::{CLICKS_DROPPED_TOTAL, CLICKS_FAILED_TOTAL, CLICKS_RECORDED_TOTAL};
use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
use std::sync::OnceLock;
use tokio::sync::mpsc;

fn snapshotter() -> &'static Snapshotter {
    static SNAPSHOTTER: OnceLock<Snapshotter> = OnceLock::new();
    SNAPSHOTTER.get_or_init(|| {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();
        drop(recorder.install());
        snapshotter
    })
}

/// Sums a counter across label sets, optionally restricted to one `cause`.
fn counter_value(name: &str, cause: Option<&str>) -> u64 {
    snapshotter()
        .snapshot()
        .into_vec()
        .into_iter()
        .filter(|(key, _, _, _)| key.key().name() == name)
        .filter(|(key, _, _, _)| {
            cause.is_none_or(|cause| {
                key.key()
                    .labels()
                    .any(|label| label.key() == "cause" && label.value() == cause)
            })
        })
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => v,
            _ => 0,
        })
        .sum()
}

#[tokio::test]
async fn test_click_pipeline_counters() {
    snapshotter();

    // Capacity 1 and no worker: the first redirect is queued, the rest are dropped.
    let store = common::InMemoryStore::new();
    store.insert_link("abc", "https://example.com");
    let (state, mut rx) = common::create_test_state_with(store.clone(), chrono_tz::Tz::UTC, 1);
    let server = TestServer::new(router(state.clone())).unwrap();

    for _ in 0..3 {
        assert_eq!(server.get("/abc").await.status_code(), 302);
    }

    assert_eq!(counter_value(CLICKS_DROPPED_TOTAL, Some("queue_full")), 2);

    // The queued click is written, a click for an unknown link fails.
    let queued = rx.try_recv().unwrap();
    let (tx, worker_rx) = mpsc::channel(4);
    tx.send(queued).await.unwrap();
    tx.send(ClickEvent::new(999)).await.unwrap();
    drop(tx);
    run_click_worker(worker_rx, state.stats_service.clone(), 2).await;

    assert_eq!(store.click_count(), 1);
    assert_eq!(counter_value(CLICKS_RECORDED_TOTAL, None), 1);
    assert_eq!(counter_value(CLICKS_FAILED_TOTAL, None), 1);

    // A stopped worker closes the queue.
    drop(rx);
    assert_eq!(server.get("/abc").await.status_code(), 302);

    assert_eq!(counter_value(CLICKS_DROPPED_TOTAL, Some("queue_closed")), 1);
    assert_eq!(counter_value(CLICKS_DROPPED_TOTAL, None), 3);
}
