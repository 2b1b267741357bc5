//! Axum route handlers for the notes HTTP API.

use crate::error::{ADD_FAILED, ApiError, LOAD_FAILED};
use crate::store::NoteStore;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::get;
use notes_types::*;
use std::sync::Arc;

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const INDEX_HTML: &str = include_str!("../static/index.html");

pub struct AppState {
    pub store: NoteStore,
}

pub fn router(state: Arc<AppState>) -> axum::Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    axum::Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/notes", get(list_notes).post(add_note))
        .with_state(state)
        .layer(cors)
}

// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// GET /api/health
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: VERSION.to_string(),
    })
}

// GET /api/notes
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let notes = state
        .store
        .read_all()
        .await
        .map_err(ApiError::storage(LOAD_FAILED))?;
    Ok(Json(notes))
}

// POST /api/notes
pub async fn add_note(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<AddNoteResponse>), ApiError> {
    let req = parse_add_note(payload)?;

    state
        .store
        .append_one(&req.text)
        .await
        .map_err(ApiError::storage(ADD_FAILED))?;

    Ok((StatusCode::CREATED, Json(AddNoteResponse::added(req.text))))
}

/// Any body that is not an object with a non-empty string `text` is rejected.
fn parse_add_note(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<AddNoteRequest, ApiError> {
    let Json(body) = payload.map_err(|e| {
        log::debug!("[NOTES] Unreadable request body: {}", e);
        ApiError::invalid_note_text()
    })?;

    // A derived struct would also accept `["text"]` as a sequence.
    let text = body
        .as_object()
        .and_then(|obj| obj.get("text"))
        .and_then(serde_json::Value::as_str)
        .filter(|text| !text.is_empty())
        .ok_or_else(ApiError::invalid_note_text)?;

    Ok(AddNoteRequest {
        text: text.to_string(),
    })
}
