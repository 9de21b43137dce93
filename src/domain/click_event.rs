//! Click event model for asynchronous click tracking.

/// An in-memory click notification passed from the redirect handler to the
/// background worker.
///
/// The redirect handler has already resolved the link, so the event carries
/// the link id and the worker performs a single insert per event.
///
/// # Usage Flow
///
/// 1. Created in the redirect handler after a successful lookup
/// 2. Sent to the channel with `try_send` (never awaited by the request)
/// 3. Processed by [`crate::application::click_worker::run_click_worker`]
/// 4. Persisted through [`crate::application::services::StatsService::record_click`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub link_id: i64,
}

impl ClickEvent {
    /// Creates a new click event for a resolved link.
    pub fn new(link_id: i64) -> Self {
        Self { link_id }
    }
}
