//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; request bodies are checked
//! with `validator`.

pub mod create;
pub mod daily;
pub mod health;
pub mod stats;
pub mod stats_list;
