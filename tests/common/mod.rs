#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use link_tracker::AppError;
use link_tracker::domain::click_event::ClickEvent;
use link_tracker::application::click_worker::run_click_worker;
use link_tracker::domain::entities::{Click, Link, NewClick, NewLink};
use link_tracker::domain::repositories::{
    DailyClicks, LinkClicks, LinkRepository, LinkStats, StatsRepository,
};
use link_tracker::state::AppState;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// In-memory link registry and click ledger.
///
/// Mirrors the PostgreSQL repositories closely enough for HTTP tests:
/// unique codes, sequential ids, left-join semantics for statistics.
#[derive(Default)]
pub struct InMemoryStore {
    links: Mutex<Vec<Link>>,
    clicks: Mutex<Vec<Click>>,
    unavailable: Mutex<bool>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every subsequent repository call fail with an internal error.
    pub fn fail_all(&self) {
        *self.unavailable.lock().unwrap() = true;
    }

    fn check_available(&self) -> Result<(), AppError> {
        if *self.unavailable.lock().unwrap() {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }

    /// Registers a link directly, bypassing the service layer.
    pub fn insert_link(&self, code: &str, destination: &str) -> i64 {
        let mut links = self.links.lock().unwrap();
        let id = links.len() as i64 + 1;
        links.push(Link::new(id, code.to_string(), destination.to_string()));
        id
    }

    /// Appends a click with an explicit timestamp.
    pub fn insert_click_at(&self, link_id: i64, clicked_at: DateTime<Utc>) {
        let mut clicks = self.clicks.lock().unwrap();
        let id = clicks.len() as i64 + 1;
        clicks.push(Click::new(id, link_id, clicked_at));
    }

    /// Appends `count` clicks placed `age` before now.
    pub fn insert_clicks_ago(&self, link_id: i64, count: usize, age: Duration) {
        let at = Utc::now() - age;
        for _ in 0..count {
            self.insert_click_at(link_id, at);
        }
    }

    pub fn click_count(&self) -> usize {
        self.clicks.lock().unwrap().len()
    }

    fn link_by_code(&self, code: &str) -> Option<Link> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned()
    }

    fn clicks_for(&self, link_id: i64) -> Vec<DateTime<Utc>> {
        self.clicks
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.link_id == link_id)
            .map(|c| c.clicked_at)
            .collect()
    }
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.check_available()?;
        if self.link_by_code(&new_link.code).is_some() {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_link_key" }),
            ));
        }
        let id = self.insert_link(&new_link.code, &new_link.destination);
        Ok(Link::new(id, new_link.code, new_link.destination))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.check_available()?;
        Ok(self.link_by_code(code))
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check_available()?;
        Ok(self.links.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl StatsRepository for InMemoryStore {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        self.check_available()?;
        let known = self
            .links
            .lock()
            .unwrap()
            .iter()
            .any(|l| l.id == new_click.link_id);
        if !known {
            return Err(AppError::internal("Database error", json!({})));
        }

        let now = Utc::now();
        self.insert_click_at(new_click.link_id, now);
        let id = self.click_count() as i64;
        Ok(Click::new(id, new_click.link_id, now))
    }

    async fn link_clicks(&self, code: &str) -> Result<Option<LinkClicks>, AppError> {
        self.check_available()?;
        Ok(self.link_by_code(code).map(|link| LinkClicks {
            clicks: self.clicks_for(link.id).len() as i64,
            code: link.code,
            destination: link.destination,
        }))
    }

    async fn all_link_stats(&self, now: DateTime<Utc>) -> Result<Vec<LinkStats>, AppError> {
        self.check_available()?;
        let links = self.links.lock().unwrap().clone();

        Ok(links
            .into_iter()
            .map(|link| {
                let clicks = self.clicks_for(link.id);
                let within = |window: Duration| {
                    clicks.iter().filter(|at| **at > now - window).count() as i64
                };
                LinkStats {
                    link_id: link.id,
                    clicks_24h: within(Duration::hours(24)),
                    clicks_7d: within(Duration::days(7)),
                    clicks_all_time: clicks.len() as i64,
                    code: link.code,
                    destination: link.destination,
                }
            })
            .collect())
    }

    async fn daily_clicks(&self, code: &str, tz: Tz) -> Result<Vec<DailyClicks>, AppError> {
        self.check_available()?;
        let Some(link) = self.link_by_code(code) else {
            return Ok(Vec::new());
        };

        let mut buckets = BTreeMap::new();
        for at in self.clicks_for(link.id) {
            *buckets.entry(at.with_timezone(&tz).date_naive()).or_insert(0i64) += 1;
        }

        Ok(buckets
            .into_iter()
            .map(|(date, clicks)| DailyClicks { date, clicks })
            .collect())
    }
}

/// Builds application state over an in-memory store with UTC day buckets.
pub fn create_test_state(store: Arc<InMemoryStore>) -> (AppState, mpsc::Receiver<ClickEvent>) {
    create_test_state_with(store, Tz::UTC, 100)
}

pub fn create_test_state_with(
    store: Arc<InMemoryStore>,
    timezone: Tz,
    queue_capacity: usize,
) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(queue_capacity);
    let state = AppState::new(store.clone(), store, timezone, tx);
    (state, rx)
}

/// Starts the click worker on the state's statistics service.
pub fn spawn_worker(state: &AppState, rx: mpsc::Receiver<ClickEvent>) -> JoinHandle<()> {
    tokio::spawn(run_click_worker(rx, state.stats_service.clone(), 4))
}
