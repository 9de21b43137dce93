//! Prometheus metrics for the click pipeline.
//!
//! Counters are emitted through the `metrics` facade; [`setup_metrics_recorder`]
//! installs the Prometheus recorder that backs them and [`metrics_routes`]
//! exposes the rendered text at `GET /metrics`.

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Clicks written to the ledger.
pub const CLICKS_RECORDED_TOTAL: &str = "clicks_recorded_total";
/// Clicks whose ledger write failed.
pub const CLICKS_FAILED_TOTAL: &str = "clicks_failed_total";
/// Clicks never queued, labelled by `cause` (`queue_full`, `queue_closed`).
pub const CLICKS_DROPPED_TOTAL: &str = "clicks_dropped_total";

/// Counts a click the redirect handler could not queue.
pub fn report_dropped_click(cause: &'static str) {
    metrics::counter!(CLICKS_DROPPED_TOTAL, "cause" => cause).increment(1);
}

/// Installs the global Prometheus recorder.
///
/// # Errors
///
/// Returns an error if a global recorder is already installed.
pub fn setup_metrics_recorder() -> Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")
}

/// `GET /metrics` rendering the current Prometheus exposition text.
pub fn metrics_routes(handle: PrometheusHandle) -> Router {
    Router::new().route(
        "/metrics",
        get(move || std::future::ready(handle.render())),
    )
}
