//! Handler for daily click buckets.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::daily::DailyClicksItem;
use crate::error::AppError;
use crate::state::AppState;

/// Returns clicks per calendar day for one link.
///
/// # Endpoint
///
/// `GET /api/daily/{link}`
///
/// # Response
///
/// ```json
/// [ { "date": "2024-05-01", "clicks": 4 }, { "date": "2024-05-02", "clicks": 0 } ]
/// ```
///
/// Days are computed in the configured `STATS_TIMEZONE` and sorted
/// ascending. Quiet days between the first and last active day are reported
/// with zero clicks. Unknown codes return an empty array.
pub async fn daily_stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<DailyClicksItem>>, AppError> {
    let daily = state.stats_service.daily_stats(&code).await?;

    Ok(Json(daily.into_iter().map(DailyClicksItem::from).collect()))
}
