//! Error type shared by the route handlers.

use crate::store::StorageError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use notes_types::ErrorResponse;

pub const INVALID_NOTE_TEXT: &str = "Note text is required and must be a string";
pub const LOAD_FAILED: &str = "Failed to load notes";
pub const ADD_FAILED: &str = "Failed to add note";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad or missing client input; the message is returned as-is.
    #[error("{0}")]
    Validation(&'static str),
    /// Storage failure; only `message` reaches the client, `source` is logged.
    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ApiError {
    pub fn invalid_note_text() -> Self {
        Self::Validation(INVALID_NOTE_TEXT)
    }

    pub fn storage(message: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |source| Self::Storage { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Validation(msg) => {
                log::debug!("[NOTES] Rejected request: {}", msg);
                *msg
            }
            Self::Storage { message, source } => {
                log::error!("[NOTES] {}: {}", message, source);
                *message
            }
        };
        (self.status(), Json(ErrorResponse::new(message))).into_response()
    }
}
