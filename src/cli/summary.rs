//! Summary mode: fetch the portfolio once and print it.

use std::io::{self, Write};

use rmbs_desk::ApiError;
use rmbs_desk::MortgageGateway;
use rmbs_desk::portfolio::ListError;
use rmbs_desk::portfolio::list::fetch_snapshot;

use super::output::write_portfolio_summary;

/// Fetches the records and rating and writes them to stdout.
///
/// # Errors
///
/// Returns an error if the records cannot be fetched or stdout cannot be
/// written.
pub async fn run(gateway: &dyn MortgageGateway) -> Result<(), ApiError> {
    let mut stdout = io::stdout().lock();
    run_to(gateway, &mut stdout).await?;
    stdout.flush().map_err(|error| ApiError::Io {
        message: error.to_string(),
    })
}

/// Fetches the portfolio and writes the summary to `writer`.
///
/// # Errors
///
/// Returns the gateway failure when the records cannot be fetched, or
/// [`ApiError::Io`] when writing fails.
pub async fn run_to<W: Write>(
    gateway: &dyn MortgageGateway,
    writer: &mut W,
) -> Result<(), ApiError> {
    let snapshot = fetch_snapshot(gateway).await.map_err(|error| match error {
        ListError::Fetch(source) | ListError::Delete { source, .. } => source,
    })?;
    tracing::info!("summary fetched {} records", snapshot.records.len());
    write_portfolio_summary(writer, &snapshot)
}
