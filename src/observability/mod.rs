//! Observability for the song catalog
//!
//! Structured logs, one JSON object per event, written to stdout.
//! `RUST_LOG` takes precedence over the configured filter.
//!
//! # Usage
//!
//! ```ignore
//! songbook::observability::init_logging("info")?;
//! tracing::info!(song_id = %id, "song added");
//! ```

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the configured directive parse
pub const FALLBACK_FILTER: &str = "info";

/// Resolve the effective filter from `RUST_LOG` or `directives`
pub fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directives))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Install the global JSON subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(directives: &str) -> Result<(), TryInitError> {
    let fmt_layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_target(true)
        .with_current_span(true);

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(fmt_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging("debug");
        assert!(init_logging("debug").is_err());
    }
}
