//! Background worker that appends click events to the ledger.
//!
//! Redirects never wait on this worker. A failed write is logged and counted,
//! and the event is discarded; there are no retries.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::application::services::StatsService;
use crate::domain::click_event::ClickEvent;
use crate::telemetry::{CLICKS_FAILED_TOTAL, CLICKS_RECORDED_TOTAL};

/// Drains `rx` and persists each event through
/// [`StatsService::record_click`], running at most `concurrency` inserts at
/// a time.
///
/// Returns once every sender has been dropped and all in-flight writes have
/// finished, which lets the server drain clicks during shutdown.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    stats_service: Arc<StatsService>,
    concurrency: usize,
) {
    let concurrency = concurrency.max(1);
    let mut in_flight = JoinSet::new();

    while let Some(event) = rx.recv().await {
        while in_flight.len() >= concurrency {
            in_flight.join_next().await;
        }

        let service = stats_service.clone();
        in_flight.spawn(async move {
            match service.record_click(event.link_id).await {
                Ok(click) => {
                    metrics::counter!(CLICKS_RECORDED_TOTAL).increment(1);
                    tracing::debug!(link_id = click.link_id, click_id = click.id, "Click recorded");
                }
                Err(e) => {
                    metrics::counter!(CLICKS_FAILED_TOTAL).increment(1);
                    tracing::error!(link_id = event.link_id, error = %e, "Failed to record click");
                }
            }
        });
    }

    while in_flight.join_next().await.is_some() {}

    tracing::info!("Click worker stopped");
}
