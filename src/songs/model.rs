//! # Song Records

use serde::{Deserialize, Serialize};

/// Writable song fields, as accepted on create and update.
///
/// Only the fields named here survive extraction from a request body;
/// anything else in the body is dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPayload {
    pub title: String,
    pub year: i64,
    pub genre: String,
    pub performer: String,
    /// Length in seconds
    #[serde(default)]
    pub duration: Option<i64>,
    /// Opaque album reference, never checked against an album registry
    #[serde(default)]
    pub album_id: Option<String>,
}

/// A song owned by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub year: i64,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i64>,
    pub album_id: Option<String>,
}

impl Song {
    /// Build a song from its payload under the given id
    pub fn new(id: String, payload: SongPayload) -> Self {
        let SongPayload {
            title,
            year,
            genre,
            performer,
            duration,
            album_id,
        } = payload;

        Self {
            id,
            title,
            year,
            genre,
            performer,
            duration,
            album_id,
        }
    }

    /// Replace every field except `id` with the payload's values.
    ///
    /// Optional fields missing from the payload are cleared.
    pub fn replace_fields(&mut self, payload: SongPayload) {
        let id = std::mem::take(&mut self.id);
        *self = Song::new(id, payload);
    }
}
