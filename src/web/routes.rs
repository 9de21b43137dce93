//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::dashboard_handler;
use axum::{Router, routing::get};

/// Dashboard routes, merged at the application root.
///
/// # Endpoints
///
/// - `GET /stats` - All-links statistics table
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/stats", get(dashboard_handler))
}
