//! Statistics dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::api::dto::stats_list::LinkStatsItem;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the statistics dashboard.
///
/// Renders `templates/dashboard.html` with one row per link.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub links: Vec<LinkStatsItem>,
    pub timezone: String,
}

/// Renders the all-links statistics dashboard.
///
/// # Endpoint
///
/// `GET /stats`
///
/// Rows come from the same query as `GET /api/all`, so counts match the
/// JSON listing. Each row links to the daily breakdown at
/// `/api/daily/{link}`.
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<DashboardTemplate, AppError> {
    let links = state
        .stats_service
        .all_link_stats()
        .await?
        .into_iter()
        .map(LinkStatsItem::from)
        .collect();

    Ok(DashboardTemplate {
        links,
        timezone: state.stats_service.timezone().name().to_string(),
    })
}
