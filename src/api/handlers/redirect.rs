//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header, header::InvalidHeaderValue},
    response::{IntoResponse, Response},
};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::json;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{error, warn};

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::telemetry::report_dropped_click;

/// Bytes escaped in `Location`. URL delimiters and existing `%XX` escapes
/// pass through; non-ASCII is always UTF-8 percent-encoded.
const LOCATION_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes a stored destination into a `Location` header value.
pub fn location_header(destination: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&utf8_percent_encode(destination, LOCATION_ENCODE).to_string())
}

/// Redirects a short code to its destination and records the click.
///
/// # Endpoint
///
/// `GET /{link}`
///
/// # Request Flow
///
/// 1. Resolve the code (404 if unknown, nothing recorded)
/// 2. Queue a click event for the background worker
/// 3. Return `302 Found` with the percent-encoded destination in `Location`
///
/// # Click Tracking
///
/// The click is queued with `try_send`. If the queue is full or the worker
/// has stopped, the click is dropped and logged; the redirect still succeeds.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&code).await?;

    let location = location_header(&link.destination).map_err(|_| {
        error!(link = %code, "Stored destination is not a valid Location header");
        AppError::internal("Error redirecting", json!({}))
    })?;

    match state.click_sender.try_send(ClickEvent::new(link.id)) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            report_dropped_click("queue_full");
            warn!(link = %code, "Click queue full, dropping click");
        }
        Err(TrySendError::Closed(_)) => {
            report_dropped_click("queue_closed");
            error!(link = %code, "Click queue closed, dropping click");
        }
    }

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
