//! Tracing subscriber setup

use crate::error::{GratitudeError, Result};
use tracing_subscriber::EnvFilter;

/// Filter directive for the configured level, raised by `-v` flags
pub fn filter_directive(configured: &str, verbosity: u8) -> &str {
    match verbosity {
        0 => configured,
        1 => "info",
        _ => "debug",
    }
}

/// Install the global stderr subscriber.
///
/// The filter comes from config and flags only; no environment variables
/// are consulted.
pub fn init(configured: &str, verbosity: u8) -> Result<()> {
    let directive = filter_directive(configured, verbosity);
    let filter = EnvFilter::try_new(directive).map_err(|e| {
        GratitudeError::Config(format!("Invalid log level '{}': {}", directive, e))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| GratitudeError::Config(format!("Failed to initialize logging: {}", e)))
}
