//! Tracing subscriber setup for binaries and hosts embedding the editor.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

pub const DEFAULT_LEVEL: &str = "info";

/// ## Summary
/// Builds an `EnvFilter` from a level or directive string.
///
/// ## Errors
/// Returns `CoreError::ConfigError` if `level` is not a valid filter directive.
pub fn build_filter(level: &str) -> CoreResult<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|err| CoreError::ConfigError(format!("invalid log level `{level}`: {err}")))
}

/// Falls back to [`DEFAULT_LEVEL`], handing back the rejection for reporting.
fn filter_or_default(level: &str) -> (EnvFilter, Option<CoreError>) {
    match build_filter(level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LEVEL), Some(err)),
    }
}

/// ## Summary
/// Installs the global tracing subscriber using the configured level.
///
/// An invalid level is logged as a warning once the subscriber is in place, and
/// [`DEFAULT_LEVEL`] is used instead.
///
/// ## Errors
/// Returns `CoreError::ConfigError` if a global subscriber is already installed.
pub fn init_tracing(logging: &LoggingConfig) -> CoreResult<()> {
    let (filter, rejected) = filter_or_default(&logging.level);
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|err| CoreError::ConfigError(err.to_string()))?;

    if let Some(err) = rejected {
        tracing::warn!(error = %err, "Keeping default log level {DEFAULT_LEVEL}");
    }
    Ok(())
}
