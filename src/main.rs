//! Songbook CLI entry point
//!
//! Delegates to the CLI module, prints errors to stderr and exits with
//! non-zero on failure.

use songbook::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
