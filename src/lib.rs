//! songbook - An in-memory song catalog served over HTTP
//!
//! The [`songs`] module owns the records, [`validation`] guards write
//! payloads, and [`http_server`] maps catalog outcomes onto a JSON
//! envelope with stable status codes.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod songs;
pub mod validation;
