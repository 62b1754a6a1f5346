//! Structured logging setup for the CLI.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job. Diagnostics go to stderr so stdout stays clean for the
//! progress report and generated prompts.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize structured logging based on CLI arguments.
///
/// Precedence: `RUST_LOG`, then `TWEETCAST_LOG`, then `--log-level`, then
/// `tweetcast=debug` with `--verbose` or `tweetcast=warn` otherwise.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("tweetcast={level}"),
        (true, None) => "tweetcast=debug".to_string(),
        (false, None) => "tweetcast=warn".to_string(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("TWEETCAST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
