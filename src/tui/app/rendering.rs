//! Rendering logic for the portfolio TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::{Focus, MortgageApp};
use crate::portfolio::portfolio_tone;
use crate::tui::components::{
    FormPanelComponent, FormPanelViewContext, MortgageTableComponent, MortgageTableViewContext,
    styled_badge,
};

impl MortgageApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "RMBS Desk - Mortgage Portfolio";
        let loading_indicator = if self.is_loading() {
            " [Loading...]"
        } else {
            ""
        };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the aggregate rating line.
    pub(super) fn render_rating_line(&self) -> String {
        let rating = self.portfolio.rating();
        let badge = styled_badge(rating, portfolio_tone(rating));
        let count = self.portfolio.records().len();
        format!("Portfolio RMBS rating: {badge}  ({count} mortgages)\n")
    }

    /// Renders the create/edit form.
    pub(super) fn render_form(&self) -> String {
        FormPanelComponent::view(&FormPanelViewContext {
            draft: self.form.draft(),
            inputs: &self.inputs,
            editing: self.form.editing_id(),
            has_focus: self.focus == Focus::Form,
        })
    }

    /// Renders the mortgage table.
    pub(super) fn render_table(&self) -> String {
        MortgageTableComponent::view(&MortgageTableViewContext {
            records: self.portfolio.records(),
            cursor_position: self.portfolio.cursor(),
            scroll_offset: self.scroll_offset(),
            visible_height: self.table_height(),
            show_cursor: self.focus == Focus::List,
        })
    }

    /// Renders the status bar: confirmation prompt, error, notice, or hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(id) = self.portfolio.pending_delete() {
            return format!("Delete mortgage #{id}? [y/n]\n");
        }

        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        if let Some(notice) = &self.notice {
            return format!("{notice}\n");
        }

        let hints = match self.focus {
            Focus::List => "j/k:move  e:edit  d:delete  n:new  r:refresh  ?:help  q:quit",
            Focus::Form => "Tab:next field  Space:toggle  Enter:submit  Esc:cancel",
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Table:
  j, Down    Move cursor down
  k, Up      Move cursor up
  Home, g    Go to first mortgage
  End, G     Go to last mortgage
  e, Enter   Edit selected mortgage
  d, Del     Delete selected mortgage
  n, Tab     New mortgage (focus form)
  r          Refresh from the service

Form:
  Tab, Down  Next field
  S-Tab, Up  Previous field
  text keys  Edit the focused amount
  Backspace  Delete one character
  Space      Toggle loan or property type
  Enter      Submit
  Esc        Cancel edit / leave form

Delete prompt:
  y          Delete
  n, Esc     Keep

Other:
  ?          Toggle this help
  q, Ctrl-C  Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
