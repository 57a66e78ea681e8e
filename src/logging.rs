//! Log output for the binary.
//!
//! The TUI draws on the terminal, so logs only go to a file. When no log
//! file is configured no subscriber is installed and `tracing` macros are
//! no-ops.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::ApiError;
use crate::config::RmbsDeskConfig;

/// Installs the global subscriber described by `config`.
///
/// Returns `false` when logging is disabled because no log file is set.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] for an invalid filter directive or
/// when a global subscriber is already installed, and [`ApiError::Io`] when
/// the log file cannot be opened.
pub fn init(config: &RmbsDeskConfig) -> Result<bool, ApiError> {
    let Some(path) = config.log_file() else {
        return Ok(false);
    };

    let filter = parse_filter(config.log_filter())?;
    let file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|error| ApiError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        })?;

    tracing::debug!("logging to {path}");
    Ok(true)
}

/// Parses a `tracing` filter directive.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] naming the directive when it does not
/// parse.
pub fn parse_filter(directive: &str) -> Result<EnvFilter, ApiError> {
    EnvFilter::try_new(directive).map_err(|error| ApiError::Configuration {
        message: format!("invalid log filter '{directive}': {error}"),
    })
}

/// Opens `path` for appending, creating it when missing.
fn open_log_file(path: &str) -> Result<File, ApiError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| ApiError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })
}
