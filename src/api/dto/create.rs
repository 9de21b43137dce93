//! DTOs for link creation.

use serde::Deserialize;
use validator::Validate;

/// Request to register a tracking link.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a validation error (400) rather than a body rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Caller-chosen short code.
    #[validate(
        required(message = "link is required"),
        length(min = 1, message = "link must not be empty")
    )]
    pub link: Option<String>,

    /// URL the short code redirects to.
    #[validate(
        required(message = "destination is required"),
        length(min = 1, message = "destination must not be empty")
    )]
    pub destination: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let req: CreateLinkRequest =
            serde_json::from_str(r#"{"link":"abc","destination":"https://example.com"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_destination_is_invalid() {
        let req: CreateLinkRequest = serde_json::from_str(r#"{"link":"abc"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("destination"));
    }

    #[test]
    fn test_empty_link_is_invalid() {
        let req: CreateLinkRequest =
            serde_json::from_str(r#"{"link":"","destination":"https://example.com"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("link"));
    }
}
