//! CLI argument definitions using clap
//!
//! Commands:
//! - songbook serve [--config <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Songbook - an in-memory song catalog over HTTP
#[derive(Parser, Debug)]
#[command(name = "songbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to, overrides the config file
        #[arg(long, short)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from(["songbook", "serve", "--port", "8080", "--host", "127.0.0.1"])
            .unwrap();
        match cli.command {
            Command::Serve { config, host, port } => {
                assert!(config.is_none());
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(8080));
            }
        }
    }

    #[test]
    fn test_serve_requires_no_arguments() {
        assert!(Cli::try_parse_from(["songbook", "serve"]).is_ok());
        assert!(Cli::try_parse_from(["songbook"]).is_err());
    }
}
