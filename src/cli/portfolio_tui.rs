//! TUI mode for managing the mortgage portfolio.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that lists, edits, and deletes mortgage records.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use rmbs_desk::tui::{MortgageApp, set_gateway, set_telemetry_sink};
use rmbs_desk::{ApiError, MortgageGateway, TracingTelemetrySink};

/// Runs the TUI against `gateway`.
///
/// The first fetch is issued by the program itself once it starts, so the
/// screen appears immediately with a loading indicator.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialise or exits abnormally.
pub async fn run(gateway: Arc<dyn MortgageGateway>) -> Result<(), ApiError> {
    // Already set only when the TUI is re-run in the same process; the
    // existing values are kept.
    let _ = set_gateway(gateway);
    let _ = set_telemetry_sink(Arc::new(TracingTelemetrySink));

    run_tui().await.map_err(|error| ApiError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `MortgageApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // MortgageApp::init() retrieves the gateway from module-level storage.
    let program = Program::<MortgageApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
