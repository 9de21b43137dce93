//! Handler for the all-links statistics listing.

use axum::{Json, extract::State};

use crate::api::dto::stats_list::LinkStatsItem;
use crate::error::AppError;
use crate::state::AppState;

/// Returns windowed click counts for every link.
///
/// # Endpoint
///
/// `GET /api/all`
///
/// # Response
///
/// ```json
/// [
///   { "link": "abc", "destination": "https://example.com", "24h": 1, "7d": 4, "allTime": 9 }
/// ]
/// ```
///
/// Links without clicks are listed with zero counts. Items are ordered by
/// creation.
pub async fn all_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkStatsItem>>, AppError> {
    let stats = state.stats_service.all_link_stats().await?;

    Ok(Json(stats.into_iter().map(LinkStatsItem::from).collect()))
}
