//! Repository trait for the click ledger and its aggregation views.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// All-time click count for a single link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkClicks {
    pub code: String,
    pub destination: String,
    pub clicks: i64,
}

/// Windowed click counts for a single link.
///
/// Windows are trailing intervals ending at the instant the query was issued,
/// so `clicks_24h <= clicks_7d <= clicks_all_time` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub link_id: i64,
    pub code: String,
    pub destination: String,
    pub clicks_24h: i64,
    pub clicks_7d: i64,
    pub clicks_all_time: i64,
}

/// Click count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyClicks {
    pub date: NaiveDate,
    pub clicks: i64,
}

/// Repository interface for click tracking and statistics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Appends a click event for a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// `link_id` that references no link.
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// All-time click count for one code.
    ///
    /// Returns `Ok(None)` if no link has that code.
    async fn link_clicks(&self, code: &str) -> Result<Option<LinkClicks>, AppError>;

    /// Windowed click counts for every link, relative to `now`.
    ///
    /// Links without clicks are included with zero counts. Rows are ordered
    /// by link id.
    async fn all_link_stats(&self, now: DateTime<Utc>) -> Result<Vec<LinkStats>, AppError>;

    /// Clicks of one code bucketed by calendar day in `tz`.
    ///
    /// Only days with at least one click are returned, ascending by date.
    /// An unknown code yields an empty list.
    async fn daily_clicks(&self, code: &str, tz: Tz) -> Result<Vec<DailyClicks>, AppError>;
}
