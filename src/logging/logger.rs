// file: src/logging/logger.rs
// version: 1.0.0
// guid: 9a3c6e15-b27d-4f80-a5c9-4d1e7b2f8036

//! Logger initialization and configuration

use crate::error::ScoutError;
use crate::Result;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn level_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Initialize the logging system
///
/// Logs go to stderr so rendered commands on stdout stay clean.
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(level_filter(verbose, quiet))
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| ScoutError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Initialize structured JSON logging, honouring `RUST_LOG` when set
pub fn init_json_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(verbose, quiet));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(io::stderr))
        .try_init()
        .map_err(|e| ScoutError::config(format!("Failed to initialize JSON logger: {}", e)))?;

    Ok(())
}

/// Run `f` inside an `operation` span
pub fn with_operation_span<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let span = tracing::info_span!("operation", name = operation);
    let _enter = span.enter();
    f()
}
