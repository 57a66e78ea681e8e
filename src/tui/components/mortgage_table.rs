//! Mortgage table component listing every record with its rating badge.
//!
//! Rows render only within the visible window (based on the scroll offset
//! and visible height). The rating badge is the last column so colour codes
//! never disturb the alignment of the columns before it.

use crate::api::MortgageRecord;
use crate::portfolio::record_tone;

use super::format::format_amount;
use super::rating_badge::{plain_badge, styled_badge};

/// Text shown instead of rows when the portfolio is empty.
pub const EMPTY_TABLE_MESSAGE: &str = "No mortgages found.";

/// Context for rendering the mortgage table.
#[derive(Debug, Clone)]
pub struct MortgageTableViewContext<'a> {
    /// Records in display order.
    pub records: &'a [MortgageRecord],
    /// Index of the selected row.
    pub cursor_position: usize,
    /// Index of the first visible row.
    pub scroll_offset: usize,
    /// Maximum number of rows to draw.
    pub visible_height: usize,
    /// Whether the selection marker is drawn (the table has focus).
    pub show_cursor: bool,
}

/// Component for displaying the mortgage table.
#[derive(Debug, Clone, Copy, Default)]
pub struct MortgageTableComponent;

impl MortgageTableComponent {
    /// Renders the header row followed by the visible records.
    #[must_use]
    pub fn view(ctx: &MortgageTableViewContext<'_>) -> String {
        if ctx.records.is_empty() {
            return format!("  {EMPTY_TABLE_MESSAGE}\n");
        }

        let mut output = table_header();
        output.push('\n');

        let visible = ctx
            .records
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(ctx.visible_height.max(1));
        for (index, record) in visible {
            let selected = ctx.show_cursor && index == ctx.cursor_position;
            let badge = styled_badge(&record.rating, record_tone(&record.rating));
            output.push_str(&format_record_row(record, selected, &badge));
            output.push('\n');
        }

        output
    }

    /// Renders every record without colour or cursor, for plain output.
    #[must_use]
    pub fn plain(records: &[MortgageRecord]) -> String {
        if records.is_empty() {
            return format!("{EMPTY_TABLE_MESSAGE}\n");
        }

        let mut output = table_header();
        output.push('\n');
        for record in records {
            output.push_str(&format_record_row(record, false, &plain_badge(&record.rating)));
            output.push('\n');
        }
        output
    }
}

/// Column titles aligned with [`format_record_row`].
#[must_use]
pub fn table_header() -> String {
    format!(
        "  {:>5} {:>5} {:>14} {:>14} {:>12} {:>12} {:<10} {:<13} {:>4} Rating",
        "ID", "Score", "Loan", "Property", "Income", "Debt", "Loan type", "Property type", "Risk"
    )
}

/// Formats one record as a table row, ending with `badge`.
#[must_use]
pub fn format_record_row(record: &MortgageRecord, selected: bool, badge: &str) -> String {
    let marker = if selected { '>' } else { ' ' };
    let fields = &record.fields;
    let risk = record
        .risk_score
        .map_or_else(|| "-".to_owned(), |score| score.to_string());

    format!(
        "{marker} {:>5} {:>5} {:>14} {:>14} {:>12} {:>12} {:<10} {:<13} {:>4} {badge}",
        record.id,
        fields.credit_score,
        format_amount(fields.loan_amount),
        format_amount(fields.property_value),
        format_amount(fields.annual_income),
        format_amount(fields.debt_amount),
        fields.loan_type.label(),
        fields.property_type.label(),
        risk,
    )
}
