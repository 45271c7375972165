//! # Response Envelope
//!
//! Every response body, success or failure, is wrapped as
//! `{status, message?, data?}`.

use serde::Serialize;

use crate::songs::Song;

/// Outcome tag carried in every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    /// Request handled
    Success,
    /// Request rejected because of the caller
    Fail,
    /// Request failed on the server
    Error,
}

/// Uniform JSON response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize = ()> {
    pub status: EnvelopeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl Envelope {
    /// Success without a data section
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Fail,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// `data` of a create response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongIdData {
    pub song_id: String,
}

/// `data` of a list response
#[derive(Debug, Clone, Serialize)]
pub struct SongsData {
    pub songs: Vec<Song>,
}

/// `data` of a single-song response
#[derive(Debug, Clone, Serialize)]
pub struct SongData {
    pub song: Song,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_envelope_serialization() {
        let envelope = Envelope::success_with_message(
            "Song added successfully",
            SongIdData {
                song_id: "abc".to_string(),
            },
        );

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Song added successfully");
        assert_eq!(json["data"]["songId"], "abc");
    }

    #[test]
    fn test_list_envelope_has_no_message() {
        let envelope = Envelope::success(SongsData { songs: vec![] });

        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["data"]["songs"], serde_json::json!([]));
    }

    #[test]
    fn test_failure_envelopes_have_no_data() {
        let fail = serde_json::to_value(Envelope::fail("Song not found")).unwrap();
        assert_eq!(fail["status"], "fail");
        assert!(fail.get("data").is_none());

        let error = serde_json::to_value(Envelope::error("boom")).unwrap();
        assert_eq!(error["status"], "error");
    }
}
