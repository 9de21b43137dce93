//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod create;
pub mod daily;
pub mod health;
pub mod redirect;
pub mod stats;
pub mod stats_list;

pub use create::create_link_handler;
pub use daily::daily_stats_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use stats::link_stats_handler;
pub use stats_list::all_stats_handler;
