//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single place for validation and error mapping.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link registry (create, resolve)
//! - [`services::stats_service::StatsService`] - Click ledger and statistics
//! - [`click_worker`] - Background persistence of queued clicks

pub mod click_worker;
pub mod services;
