//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{LinkService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::{LinkRepository, StatsRepository};

/// Handles to the services and the click channel.
///
/// Constructed once at startup and cloned into each request; there is no
/// module-level singleton.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
}

impl AppState {
    /// Wires services over the given repositories.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        stats_repository: Arc<dyn StatsRepository>,
        stats_timezone: chrono_tz::Tz,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            stats_service: Arc::new(StatsService::new(stats_repository, stats_timezone)),
            click_sender,
        }
    }
}
