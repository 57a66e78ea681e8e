//! Table cursor movement and scrolling.
//!
//! Each handler moves the portfolio cursor and then adjusts the scroll
//! offset so the selected row stays inside the visible window.

use bubbletea_rs::Cmd;

use super::MortgageApp;
use crate::tui::messages::AppMsg;

impl MortgageApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.portfolio.cursor_up(),
            AppMsg::CursorDown => self.portfolio.cursor_down(),
            AppMsg::Home => self.portfolio.cursor_home(),
            AppMsg::End => self.portfolio.cursor_end(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
            }
        }
        self.adjust_scroll_to_cursor();
        None
    }

    /// Adjusts the scroll offset so the cursor remains within the viewport.
    pub(super) fn adjust_scroll_to_cursor(&mut self) {
        let cursor = self.portfolio.cursor();
        let visible_height = self.table_height();

        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if cursor >= viewport_end {
            self.scroll_offset = cursor.saturating_sub(visible_height.saturating_sub(1));
        }
    }

    /// Returns the first visible table row.
    pub(super) const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }
}
