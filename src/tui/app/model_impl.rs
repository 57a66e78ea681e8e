//! `Model` trait implementation for the portfolio TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `MortgageApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::MortgageApp;
use crate::tui::input::map_key_to_message_with_context;
use crate::tui::messages::AppMsg;

impl Model for MortgageApp {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::empty();
        if let Some(gateway) = crate::tui::stored_gateway() {
            model = model.with_gateway(gateway);
        }
        if let Some(sink) = crate::tui::stored_telemetry_sink() {
            model = model.with_telemetry(sink);
        }

        // The first fetch is issued when `AppMsg::Initialized` is handled.
        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message_with_context(key_msg, self.input_context());
            return mapped.and_then(|app_msg| self.handle_message(&app_msg));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.fit_to_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_rating_line());
        output.push_str(&self.render_form());
        output.push('\n');
        output.push_str(&self.render_table());
        output.push_str(&self.render_status_bar());

        self.fit_to_viewport(&output)
    }
}

impl MortgageApp {
    /// Pads or truncates every row to the terminal size.
    ///
    /// Rows are kept one column narrower than the terminal to avoid
    /// autowrap, and padded with spaces so shorter frames overwrite stale
    /// cells.
    fn fit_to_viewport(&self, output: &str) -> String {
        let width = (self.width as usize).saturating_sub(1).max(1);
        let height = (self.height as usize).max(1);

        let mut lines: Vec<String> = output
            .lines()
            .take(height)
            .map(|line| fit_line(line, width))
            .collect();
        let blank = " ".repeat(width);
        lines.resize(height, blank);

        let mut fitted = lines.join("\n");
        fitted.push('\n');
        fitted
    }
}

/// Truncates `line` to `width` visible columns and pads the remainder,
/// copying escape sequences through without counting them.
fn fit_line(line: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(line.len() + width);
    let mut visible = 0_usize;
    let mut styled = false;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            styled = true;
            fitted.push(ch);
            for escaped in chars.by_ref() {
                fitted.push(escaped);
                if escaped.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            break;
        }
        fitted.push(ch);
        visible = visible.saturating_add(char_width);
    }

    fitted.push_str(&" ".repeat(width.saturating_sub(visible)));
    if styled {
        fitted.push_str("\x1b[0m");
    }
    fitted
}
