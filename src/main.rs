//! rmbs-desk entrypoint: loads configuration and runs the selected mode.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use rmbs_desk::{ApiError, HttpMortgageGateway, OperationMode, RmbsDeskConfig, logging};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ApiError> {
    let config = load_config()?;
    config.validate()?;

    if logging::init(&config)? {
        tracing::info!("rmbs-desk starting against {}", config.api_url);
    }

    let gateway = HttpMortgageGateway::new(&config.api_url, config.request_timeout())?;

    match config.operation_mode() {
        OperationMode::Summary => cli::summary::run(&gateway).await,
        OperationMode::Interactive => cli::portfolio_tui::run(Arc::new(gateway)).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<RmbsDeskConfig, ApiError> {
    RmbsDeskConfig::load().map_err(|error| ApiError::Configuration {
        message: error.to_string(),
    })
}
