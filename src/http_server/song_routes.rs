//! Song HTTP Routes
//!
//! CRUD endpoints for the song catalog. Each handler validates write
//! payloads, calls exactly one store operation, and wraps the outcome in an
//! [`Envelope`]. Failures are rendered by [`ApiError`].

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use super::response::{Envelope, SongData, SongIdData, SongsData};
use crate::songs::{SongPayload, SongStore};
use crate::validation::{SongPayloadValidator, ValidationError};

// ==================
// Shared State
// ==================

/// Song state shared across handlers
pub struct SongsState {
    pub store: Arc<SongStore>,
    pub validator: SongPayloadValidator,
}

impl SongsState {
    pub fn new(store: Arc<SongStore>) -> Self {
        Self {
            store,
            validator: SongPayloadValidator::new(),
        }
    }
}

impl Default for SongsState {
    fn default() -> Self {
        Self::new(Arc::new(SongStore::new()))
    }
}

// ==================
// Song Routes
// ==================

/// Create song routes
pub fn song_routes(state: Arc<SongsState>) -> Router {
    Router::new()
        .route("/songs", post(create_song_handler).get(list_songs_handler))
        .route(
            "/songs/:id",
            get(get_song_handler)
                .put(update_song_handler)
                .delete(delete_song_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Validate a raw body and keep only the song fields
fn extract_payload(
    validator: &SongPayloadValidator,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<SongPayload> {
    let Json(body) = body?;
    validator.validate(&body)?;

    serde_json::from_value(body)
        .map_err(|e| ApiError::from(ValidationError::MalformedBody(e.to_string())))
}

// ==================
// Song Handlers
// ==================

async fn create_song_handler(
    State(state): State<Arc<SongsState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<SongIdData>>)> {
    let payload = extract_payload(&state.validator, body)?;
    let song_id = state.store.create(payload)?;

    tracing::info!(song_id = %song_id, "song added");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success_with_message(
            "Song added successfully",
            SongIdData { song_id },
        )),
    ))
}

async fn list_songs_handler(
    State(state): State<Arc<SongsState>>,
) -> ApiResult<Json<Envelope<SongsData>>> {
    let songs = state.store.list_all()?;
    Ok(Json(Envelope::success(SongsData { songs })))
}

async fn get_song_handler(
    State(state): State<Arc<SongsState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Envelope<SongData>>> {
    let Path(id) = path?;
    let song = state.store.get_by_id(&id)?;
    Ok(Json(Envelope::success(SongData { song })))
}

async fn update_song_handler(
    State(state): State<Arc<SongsState>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Envelope>> {
    let Path(id) = path?;
    let payload = extract_payload(&state.validator, body)?;
    state.store.update_by_id(&id, payload)?;

    tracing::info!(song_id = %id, "song updated");

    Ok(Json(Envelope::message("Song updated successfully")))
}

async fn delete_song_handler(
    State(state): State<Arc<SongsState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Envelope>> {
    let Path(id) = path?;
    state.store.delete_by_id(&id)?;

    tracing::info!(song_id = %id, "song deleted");

    Ok(Json(Envelope::message("Song deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_payload_drops_unknown_fields() {
        let body = json!({
            "title": "X",
            "year": 2020,
            "genre": "Pop",
            "performer": "Y",
            "id": "forged"
        });

        let payload = extract_payload(&SongPayloadValidator::new(), Ok(Json(body))).unwrap();
        assert_eq!(payload.title, "X");
        assert_eq!(payload.album_id, None);
    }

    #[test]
    fn test_extract_payload_rejects_invalid_body() {
        let body = json!({ "year": 2020, "genre": "Pop", "performer": "Y" });

        let err = extract_payload(&SongPayloadValidator::new(), Ok(Json(body))).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "\"title\" is required");
    }

    #[test]
    fn test_songs_state_starts_empty() {
        let state = SongsState::default();
        assert!(state.store.is_empty().unwrap());
    }
}
