//! Logging system initialization
//!
//! Sets up tracing-based logging to stderr so stdout stays free for the label
//! and notification output of the demo driver.

use crate::error::{Result, StepperError};
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info";

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
pub fn init_logging() -> Result<()> {
    init_logging_with_default(DEFAULT_FILTER)
}

/// Initialize logging with a caller-chosen fallback filter
///
/// `RUST_LOG` still wins when set. Fails if a global subscriber is already installed.
pub fn init_logging_with_default(default_filter: &str) -> Result<()> {
    let filter = build_filter(default_filter)?;

    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(true) // Include target module
        .with_line_number(true) // Include line numbers
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| StepperError::LoggingError(Box::new(e)))?;

    tracing::debug!("snapping-stepper v{} logging ready", env!("CARGO_PKG_VERSION"));

    Ok(())
}

fn build_filter(default_filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| StepperError::LoggingError(Box::new(e)))
}
