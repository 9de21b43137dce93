//! API route configuration.

use crate::api::handlers::{all_stats_handler, daily_stats_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON statistics routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /all`           - Windowed click counts for every link
/// - `GET /daily/{link}`  - Clicks per day for one link
pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(all_stats_handler))
        .route("/daily/{link}", get(daily_stats_handler))
}
