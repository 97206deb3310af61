//! Response types for the validation service API.

use serde::{Deserialize, Serialize};

/// Result of a validation request.
///
/// Returned by every endpoint: on success `messages` holds a single
/// confirmation line; on failure it holds the validation errors verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Indicates whether the validation was successful.
    pub success: bool,
    /// Messages explaining the validation result.
    pub messages: Vec<String>,
}

impl ValidationResponse {
    /// Creates a success response carrying a single confirmation message.
    pub fn valid(confirmation: impl Into<String>) -> Self {
        Self {
            success: true,
            messages: vec![confirmation.into()],
        }
    }

    /// Creates a failure response carrying the full error list unmodified.
    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            success: false,
            messages: errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_response_serialization() {
        let response = ValidationResponse::valid("Invoice is valid");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"messages\":[\"Invoice is valid\"]"));
    }

    #[test]
    fn test_invalid_response_keeps_all_messages() {
        let response = ValidationResponse::invalid(vec![
            "Amount must not be negative".to_string(),
            "Invalid currency: ABC".to_string(),
        ]);
        assert!(!response.success);
        assert_eq!(response.messages.len(), 2);
    }

    #[test]
    fn test_response_round_trip() {
        let response = ValidationResponse::invalid(vec!["Items must not be null".to_string()]);
        let json = serde_json::to_string(&response).unwrap();
        let deserialized: ValidationResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.success, response.success);
        assert_eq!(deserialized.messages, response.messages);
    }
}
