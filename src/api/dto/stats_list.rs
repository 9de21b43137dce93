//! DTOs for the all-links statistics listing.

use serde::Serialize;

use crate::domain::repositories::LinkStats;

/// Windowed click counts for a single link.
#[derive(Debug, Serialize)]
pub struct LinkStatsItem {
    pub link: String,
    pub destination: String,
    #[serde(rename = "24h")]
    pub clicks_24h: i64,
    #[serde(rename = "7d")]
    pub clicks_7d: i64,
    #[serde(rename = "allTime")]
    pub clicks_all_time: i64,
}

impl From<LinkStats> for LinkStatsItem {
    fn from(stats: LinkStats) -> Self {
        Self {
            link: stats.code,
            destination: stats.destination,
            clicks_24h: stats.clicks_24h,
            clicks_7d: stats.clicks_7d,
            clicks_all_time: stats.clicks_all_time,
        }
    }
}
