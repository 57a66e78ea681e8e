//! CLI operation mode handlers.
//!
//! - [`portfolio_tui`]: Interactive TUI for managing the portfolio
//! - [`summary`]: Print the portfolio once and exit
//!
//! Output formatting utilities are in [`output`].

pub mod output;
pub mod portfolio_tui;
pub mod summary;

#[cfg(test)]
pub mod test_utils;
