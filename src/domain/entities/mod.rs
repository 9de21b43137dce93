//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A short code mapped to a destination URL
//! - [`Click`] - A recorded redirect through a link
//!
//! Creation inputs live in separate structs (`NewLink`, `NewClick`) because
//! identifiers and timestamps are assigned by the store.

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
