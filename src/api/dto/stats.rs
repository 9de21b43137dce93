//! DTOs for single-link statistics.

use serde::Serialize;

use crate::domain::repositories::LinkClicks;

/// All-time click count for one link.
#[derive(Debug, Serialize)]
pub struct LinkStatsResponse {
    pub link: String,
    pub destination: String,
    pub clicks: i64,
}

impl From<LinkClicks> for LinkStatsResponse {
    fn from(stats: LinkClicks) -> Self {
        Self {
            link: stats.code,
            destination: stats.destination,
            clicks: stats.clicks,
        }
    }
}
