//! # Songbook HTTP Server Module
//!
//! This module exposes the song catalog over HTTP with JSON bodies.
//! Every response is wrapped in a `{status, message?, data?}` envelope.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /songs` - Add a song (201)
//! - `GET /songs` - List songs
//! - `GET /songs/{id}` - Get a song
//! - `PUT /songs/{id}` - Replace a song's fields
//! - `DELETE /songs/{id}` - Remove a song
//!
//! Validation failures answer 400, unknown ids 404, anything else 500.

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod response;
pub mod server;
pub mod song_routes;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult, FailureKind, SERVER_FAILURE_MESSAGE};
pub use response::{Envelope, EnvelopeStatus};
pub use server::HttpServer;
pub use song_routes::{song_routes, SongsState};
