//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.rmbs-desk.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `RMBS_DESK_API_URL`,
//!    `RMBS_DESK_REQUEST_TIMEOUT_SECONDS`, `RMBS_DESK_LOG_FILE`,
//!    `RMBS_DESK_LOG_FILTER`
//! 4. **Command-line arguments** – `--api-url`/`-u`, `--summary`/`-s`, and
//!    the long forms of the remaining fields
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "http://localhost:5000"
//! request_timeout_seconds = 20
//! log_file = "rmbs-desk.log"
//! log_filter = "rmbs_desk=debug"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::ApiError;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive TUI for managing the portfolio.
    Interactive,
    /// Print the portfolio once and exit.
    Summary,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use rmbs_desk::RmbsDeskConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = RmbsDeskConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be consistent");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "RMBS_DESK",
    discovery(
        dotfile_name = ".rmbs-desk.toml",
        config_file_name = "rmbs-desk.toml",
        app_name = "rmbs-desk"
    )
)]
pub struct RmbsDeskConfig {
    /// Base URL of the mortgage-records service.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-u <URL>`
    /// - Environment: `RMBS_DESK_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub api_url: String,

    /// HTTP request timeout in seconds. Must be greater than zero.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Prints the portfolio table once and exits instead of starting the
    /// TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--summary` / `-s`
    /// - Config file: `summary = true`
    ///
    /// Note: ortho-config does not load boolean values from the
    /// environment.
    #[ortho_config(cli_short = 's')]
    pub summary: bool,

    /// File that receives log output. Logging is disabled when unset
    /// because the TUI owns the terminal.
    #[ortho_config()]
    pub log_file: Option<String>,

    /// `tracing` filter directive (e.g. `rmbs_desk=debug`).
    #[ortho_config()]
    pub log_filter: Option<String>,
}

/// Default service location.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 20;
/// Filter used when `log_filter` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

impl Default for RmbsDeskConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            summary: false,
            log_file: None,
            log_filter: None,
        }
    }
}

impl RmbsDeskConfig {
    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.summary {
            OperationMode::Summary
        } else {
            OperationMode::Interactive
        }
    }

    /// Returns the configured request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns the log filter directive, falling back to `info`.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter
            .as_deref()
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Returns the log file path when one is configured and non-blank.
    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }

    /// Validates configuration consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the API URL is blank or not
    /// an HTTP(S) URL, or when the request timeout is zero.
    pub fn validate(&self) -> Result<(), ApiError> {
        let api_url = self.api_url.trim();
        if api_url.is_empty() {
            return Err(ApiError::Configuration {
                message: "API URL is required (use --api-url or -u)".to_owned(),
            });
        }

        let parsed = Url::parse(api_url).map_err(|error| ApiError::Configuration {
            message: format!("API URL '{api_url}' is invalid: {error}"),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Configuration {
                message: format!("API URL '{api_url}' must use http or https"),
            });
        }

        if self.request_timeout_seconds == 0 {
            return Err(ApiError::Configuration {
                message: "request timeout must be greater than zero seconds".to_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
