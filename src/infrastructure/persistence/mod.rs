//! PostgreSQL repository implementations.
//!
//! Queries are built with SQLx's runtime API (`query_as` + `FromRow`), so the
//! crate builds without a live database or an offline query cache.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage and retrieval
//! - [`PgStatsRepository`] - Click ledger writes and aggregation queries

pub mod pg_link_repository;
pub mod pg_stats_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_stats_repository::PgStatsRepository;
