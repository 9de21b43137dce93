//! Click statistics and analytics service.

use std::sync::Arc;

use chrono::Utc;
use chrono_tz::Tz;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{DailyClicks, LinkClicks, LinkStats, StatsRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for recording clicks and reading click statistics.
///
/// Daily buckets are computed in a fixed reference zone supplied at
/// construction time.
pub struct StatsService {
    repository: Arc<dyn StatsRepository>,
    timezone: Tz,
}

impl StatsService {
    /// Creates a new statistics service bucketing days in `timezone`.
    pub fn new(repository: Arc<dyn StatsRepository>, timezone: Tz) -> Self {
        Self {
            repository,
            timezone,
        }
    }

    /// Returns the zone used for daily buckets.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Appends a click event for a link.
    ///
    /// Called by the background click worker for every queued redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_click(&self, link_id: i64) -> Result<Click, AppError> {
        self.repository.record_click(NewClick { link_id }).await
    }

    /// All-time click count for one link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn link_stats(&self, code: &str) -> Result<LinkClicks, AppError> {
        self.repository
            .link_clicks(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "link": code })))
    }

    /// Windowed click counts for every link.
    ///
    /// The 24h and 7d windows both end at a single instant captured here, so
    /// every row satisfies `clicks_24h <= clicks_7d <= clicks_all_time`.
    /// Rows are ordered by link id (creation order).
    pub async fn all_link_stats(&self) -> Result<Vec<LinkStats>, AppError> {
        self.repository.all_link_stats(Utc::now()).await
    }

    /// Daily click counts for one link, ascending by date.
    ///
    /// Days between the first and the last active day that have no clicks
    /// are included with a zero count. Unknown codes and links without
    /// clicks yield an empty list.
    pub async fn daily_stats(&self, code: &str) -> Result<Vec<DailyClicks>, AppError> {
        let buckets = self.repository.daily_clicks(code, self.timezone).await?;
        Ok(fill_missing_days(buckets))
    }
}

/// Inserts zero-count days between consecutive buckets.
///
/// Expects `buckets` sorted ascending by date with unique dates.
fn fill_missing_days(buckets: Vec<DailyClicks>) -> Vec<DailyClicks> {
    let (first, last) = match (buckets.first(), buckets.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => return Vec::new(),
    };

    let span = (last - first).num_days().max(0) as usize + 1;
    let mut filled = Vec::with_capacity(span);
    let mut counts = buckets.iter().peekable();

    for date in first.iter_days().take(span) {
        let clicks = match counts.peek() {
            Some(&bucket) if bucket.date == date => {
                counts.next();
                bucket.clicks
            }
            _ => 0,
        };
        filled.push(DailyClicks { date, clicks });
    }

    filled
}
