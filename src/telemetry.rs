//! Logging initialisation.
//!
//! Installs a `tracing-subscriber` formatter writing to stderr, so stdout
//! carries only timings and the report. `RUST_LOG` overrides the configured
//! level when set.

use crate::config::{LogFormat, LoggingConfig, ValidationError};
use thiserror::Error;
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("logging already initialised: {0}")]
    AlreadyInitialised(String),
}

/// Build the level filter: `RUST_LOG` if set, the configured level otherwise.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let default_level = LevelFilter::from_level(config.level.as_tracing());
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError::AlreadyInitialised`] when called a second time
/// in the same process.
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| TelemetryError::AlreadyInitialised(e.to_string()))
}

/// Emit configuration warnings. Call after [`init`], or they go nowhere.
pub fn log_validation_warnings(warnings: &[ValidationError]) {
    for warning in warnings {
        warn!(field = %warning.field, "{}", warning.message);
    }
}
