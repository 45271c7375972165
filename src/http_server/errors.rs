//! # API Errors
//!
//! Every handler failure funnels through [`ApiError`], and a single
//! [`IntoResponse`] impl turns it into a status code and envelope.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::response::Envelope;
use crate::songs::CatalogError;
use crate::validation::ValidationError;

/// Message returned for any failure not caused by the caller
pub const SERVER_FAILURE_MESSAGE: &str = "Sorry, our server encountered a failure.";

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// How a failure is reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Payload rejected (400)
    ValidationFailure,
    /// Referenced song does not exist (404)
    NotFound,
    /// Anything else (500)
    Unclassified,
}

impl FailureKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            FailureKind::ValidationFailure => StatusCode::BAD_REQUEST,
            FailureKind::NotFound => StatusCode::NOT_FOUND,
            FailureKind::Unclassified => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Handler errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The `{id}` path segment could not be decoded, so no song can match it
    #[error("Song not found")]
    UnreadableSongId(String),
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Validation(_) => FailureKind::ValidationFailure,
            ApiError::Catalog(err) if err.is_not_found() => FailureKind::NotFound,
            ApiError::UnreadableSongId(_) => FailureKind::NotFound,
            // Invariant breaks point at the id generator, not the caller.
            ApiError::Catalog(_) => FailureKind::Unclassified,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::MalformedBody(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::UnreadableSongId(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let body = match kind {
            FailureKind::ValidationFailure | FailureKind::NotFound => {
                Envelope::fail(self.to_string())
            }
            FailureKind::Unclassified => {
                tracing::error!(error = ?self, "request failed");
                Envelope::error(SERVER_FAILURE_MESSAGE)
            }
        };

        (kind.status_code(), Json(body)).into_response()
    }
}
