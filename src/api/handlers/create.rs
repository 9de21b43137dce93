//! Handler for link creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::create::CreateLinkRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new tracking link.
///
/// # Endpoint
///
/// `POST /create`
///
/// # Request Body
///
/// ```json
/// { "link": "abc", "destination": "https://example.com" }
/// ```
///
/// # Response
///
/// `200 OK` with a plain-text confirmation: `Tracking link created: abc`.
///
/// # Errors
///
/// - 400 if the body is not JSON or either field is missing or empty
/// - 409 if the code is already registered
/// - 500 on database errors
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<String, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Missing required parameters: link or destination",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let (Some(code), Some(destination)) = (payload.link, payload.destination) else {
        return Err(AppError::bad_request(
            "Missing required parameters: link or destination",
            json!({}),
        ));
    };

    let link = state.link_service.create_link(code, destination).await?;

    tracing::info!(link = %link.code, link_id = link.id, "Tracking link created");

    Ok(format!("Tracking link created: {}", link.code))
}
