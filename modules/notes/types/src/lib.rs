//! Shared types for the notes service and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Request Types
// =====================================================

/// Append a note to the collection.
///
/// serde also fills this from a one-element array, so the service checks
/// for a JSON object before building it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddNoteRequest {
    /// Note body; must be a non-empty string
    pub text: String,
}

// =====================================================
// Response Types
// =====================================================

/// Confirmation returned after a note is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddNoteResponse {
    pub message: String,
    pub note: String,
}

impl AddNoteResponse {
    pub const MESSAGE: &'static str = "Note added successfully";

    pub fn added(note: impl Into<String>) -> Self {
        Self {
            message: Self::MESSAGE.to_string(),
            note: note.into(),
        }
    }
}

/// Error body for every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// Service health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_note_response_shape() {
        let value = serde_json::to_value(AddNoteResponse::added("buy milk")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "Note added successfully",
                "note": "buy milk"
            })
        );
    }

    #[test]
    fn test_add_note_request_rejects_non_string_text() {
        let parsed: Result<AddNoteRequest, _> =
            serde_json::from_value(serde_json::json!({ "text": 5 }));
        assert!(parsed.is_err());

        let missing: Result<AddNoteRequest, _> = serde_json::from_value(serde_json::json!({}));
        assert!(missing.is_err());
    }
}
