//! UI components for the mortgage portfolio TUI.
//!
//! Components are stateless renderers: each takes a view context borrowed
//! from the application model and returns the text to draw.

mod form_panel;
mod format;
mod mortgage_table;
mod rating_badge;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub(crate) use form_panel::FORM_PANEL_HEIGHT;
pub use form_panel::{FormPanelComponent, FormPanelViewContext};
pub use format::format_amount;
pub use mortgage_table::{
    EMPTY_TABLE_MESSAGE, MortgageTableComponent, MortgageTableViewContext, format_record_row,
    table_header,
};
pub use rating_badge::{plain_badge, styled_badge};
