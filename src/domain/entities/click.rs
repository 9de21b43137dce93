//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a tracking link is followed.
///
/// Click events are append-only: the service never updates or deletes them.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(id: i64, link_id: i64, clicked_at: DateTime<Utc>) -> Self {
        Self {
            id,
            link_id,
            clicked_at,
        }
    }
}

/// Input data for recording a new click event.
///
/// The `link_id` must reference an existing link; the timestamp is set by
/// the database.
#[derive(Debug, Clone, Copy)]
pub struct NewClick {
    pub link_id: i64,
}
