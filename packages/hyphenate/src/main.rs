//! `hyphenate` binary: inserts soft hyphens into files in place.

use std::process::ExitCode;

use hyphenate::cli;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr; stdout only carries the run summary
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
