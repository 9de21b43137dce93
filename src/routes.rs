//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `POST /create`          - Register a tracking link
//! - `GET  /stats`           - HTML statistics dashboard
//! - `GET  /health`          - Health check: DB, click queue
//! - `GET  /metrics`         - Prometheus metrics
//! - `GET  /api/all`         - All-links statistics (JSON)
//! - `GET  /api/daily/{link}` - Daily click buckets (JSON)
//! - `GET  /{link}`          - Redirect and record a click
//! - `GET  /{link}/stats`    - All-time clicks for one link (JSON)
//!
//! Static segments take precedence over `/{link}`, so `create`, `stats`,
//! `health`, `metrics` and `api` are refused as link codes at registration.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    create_link_handler, health_handler, link_stats_handler, redirect_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::telemetry::metrics_routes;
use crate::web;
use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application routes with tracing, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create", post(create_link_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::stats_routes())
        .merge(web::routes::dashboard_routes())
        .route("/{link}", get(redirect_handler))
        .route("/{link}/stats", get(link_stats_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Adds `GET /metrics` rendered from `metrics`. Trailing slashes are trimmed
/// before routing, so `/abc/stats/` reaches the same handler as `/abc/stats`.
pub fn app_router(state: AppState, metrics: PrometheusHandle) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state).merge(metrics_routes(metrics)))
}
