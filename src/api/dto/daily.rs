//! DTOs for daily click buckets.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::repositories::DailyClicks;

/// Click count for one calendar day, serialized as `{"date": "YYYY-MM-DD", "clicks": n}`.
#[derive(Debug, Serialize)]
pub struct DailyClicksItem {
    pub date: NaiveDate,
    pub clicks: i64,
}

impl From<DailyClicks> for DailyClicksItem {
    fn from(day: DailyClicks) -> Self {
        Self {
            date: day.date,
            clicks: day.clicks,
        }
    }
}
