//! Output formatting utilities for CLI operations.

use std::io::Write;

use rmbs_desk::ApiError;
use rmbs_desk::portfolio::PortfolioSnapshot;
use rmbs_desk::portfolio::list::FETCH_RATING_FAILED;
use rmbs_desk::tui::components::{MortgageTableComponent, plain_badge};

/// Writes the portfolio rating and the record table to the given writer.
///
/// A rating that could not be fetched is reported in place of the badge
/// rather than failing the whole summary.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when writing fails.
pub fn write_portfolio_summary<W: Write>(
    writer: &mut W,
    snapshot: &PortfolioSnapshot,
) -> Result<(), ApiError> {
    let rating_line = match &snapshot.rating {
        Ok(portfolio) => format!(
            "Portfolio RMBS rating: {} ({} mortgages)",
            plain_badge(&portfolio.rating),
            snapshot.records.len()
        ),
        Err(_) => FETCH_RATING_FAILED.to_owned(),
    };

    writeln!(writer, "{rating_line}")
        .and_then(|()| write!(writer, "{}", MortgageTableComponent::plain(&snapshot.records)))
        .map_err(|error| ApiError::Io {
            message: error.to_string(),
        })
}
