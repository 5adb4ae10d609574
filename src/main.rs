use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chessmate_play::{PlayConfig, PlayError, Session};

/// Log directives used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG: &str = "warn";

/// Build the log filter from a `RUST_LOG`-style directive string.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG))
}

fn main() -> Result<()> {
    // stdout carries the board and prompts; diagnostics stay on stderr.
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .init();
    info!("chessmate starting");

    let config = PlayConfig::from_env()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    match Session::new(stdin.lock(), stdout.lock(), config).run() {
        Ok(end) => info!(?end, "chessmate exiting"),
        Err(PlayError::InputClosed) => info!("input closed, exiting"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
