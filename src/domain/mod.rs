//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler resolves the short code
//! 2. [`click_event::ClickEvent`] is sent to a bounded channel
//! 3. `crate::application::click_worker::run_click_worker` picks it up
//! 4. Click data is persisted via [`repositories::StatsRepository`]

pub mod click_event;
pub mod entities;
pub mod repositories;
