//! Web dashboard layer for browser-based UI.
//!
//! Server-side rendered with Askama templates from `templates/`.

pub mod handlers;
pub mod routes;
