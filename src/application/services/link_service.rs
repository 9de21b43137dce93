//! Link registry service: creation and resolution of tracking links.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Codes shadowed by static routes; `GET /{code}` could never reach them.
pub const RESERVED_CODES: &[&str] = &["api", "create", "health", "metrics", "stats"];

/// Service for creating and resolving tracking links.
///
/// Codes are caller-supplied; the service never generates or rewrites them.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Registers a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `code` or `destination` is empty,
    /// or if `code` is one of [`RESERVED_CODES`].
    /// Returns [`AppError::Conflict`] if the code is already taken; the
    /// existing link is left untouched.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_link(&self, code: String, destination: String) -> Result<Link, AppError> {
        if code.trim().is_empty() || destination.trim().is_empty() {
            return Err(AppError::bad_request(
                "Missing required parameters: link or destination",
                json!({ "link": code, "destination": destination }),
            ));
        }

        if RESERVED_CODES.contains(&code.as_str()) {
            return Err(AppError::bad_request(
                "Link code is reserved",
                json!({ "link": code }),
            ));
        }

        self.link_repository
            .create(NewLink {
                code: code.clone(),
                destination,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "Link code already exists",
                    json!({ "link": code }),
                ),
                other => other,
            })
    }

    /// Resolves a code to its link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has that code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "link": code })))
    }

    /// Counts registered links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }
}
