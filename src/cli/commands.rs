//! CLI command implementations

use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_logging;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => {
            let config = resolve_config(config.as_deref(), host, port)?;
            serve(config)
        }
    }
}

/// Build the server config from an optional file plus CLI overrides
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    Ok(config)
}

/// Start the HTTP song catalog
///
/// 1. Install logging
/// 2. Build the server with a fresh, empty catalog
/// 3. Serve until Ctrl-C
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    init_logging(&config.log_filter).map_err(|e| CliError::logging_error(e.to_string()))?;

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;
    use std::io::Write;

    #[test]
    fn test_resolve_defaults_without_file() {
        let config = resolve_config(None, None, None).unwrap();
        assert_eq!(config, HttpServerConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "127.0.0.1", "port": 7000, "log_filter": "debug"}}"#).unwrap();

        let config = resolve_config(Some(file.path()), None, Some(7100)).unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:7100");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_bad_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{").unwrap();

        let err = resolve_config(Some(file.path()), None, None).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
