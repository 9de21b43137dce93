//! Handler for single-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::LinkStatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the all-time click count for one link.
///
/// # Endpoint
///
/// `GET /{link}/stats`
///
/// # Response
///
/// ```json
/// { "link": "abc", "destination": "https://example.com", "clicks": 1 }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn link_stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkStatsResponse>, AppError> {
    let stats = state.stats_service.link_stats(&code).await?;

    Ok(Json(stats.into()))
}
