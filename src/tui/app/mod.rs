//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! portfolio TUI. It owns the form controller and the portfolio list state,
//! routes messages to them, and turns network operations into commands.
//!
//! # Module Structure
//!
//! - `navigation`: Table cursor movement and scrolling
//! - `form_handlers`: Form editing and create/update submission
//! - `list_handlers`: Refresh and delete confirmation
//! - `lifecycle_handlers`: Startup, quit, help, and resize
//! - `rendering`: View rendering methods for terminal output
//! - `model_impl`: The `bubbletea_rs::Model` implementation

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::api::{MortgageGateway, MortgageRecord};
use crate::portfolio::{FormController, InFlightTracker, PortfolioState};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

use super::components::FORM_PANEL_HEIGHT;
use super::input::InputContext;
use super::messages::AppMsg;
use super::state::FormInputs;

mod form_handlers;
mod lifecycle_handlers;
mod list_handlers;
mod model_impl;
mod navigation;
mod rendering;

/// Title, rating line, blank separator, table header, and status bar.
const CHROME_HEIGHT: usize = 5;

/// Minimum number of table rows kept visible.
const MIN_TABLE_HEIGHT: usize = 1;

/// Error shown when no gateway was configured before starting.
pub(crate) const NO_GATEWAY: &str = "Mortgage service is not configured";

/// Which pane receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The mortgage table.
    #[default]
    List,
    /// The create/edit form.
    Form,
}

/// Main application model for the portfolio TUI.
pub struct MortgageApp {
    /// Records, rating, cursor, and pending delete.
    pub(crate) portfolio: PortfolioState,
    /// Draft record and edit target.
    pub(crate) form: FormController,
    /// Raw input text and focused field.
    pub(crate) inputs: FormInputs,
    /// Pane with keyboard focus.
    pub(crate) focus: Focus,
    /// Ticket of the network operation in flight.
    pub(crate) in_flight: InFlightTracker,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Confirmation of the last successful mutation.
    pub(crate) notice: Option<String>,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// First table row drawn.
    scroll_offset: usize,
    /// Whether the startup fetch has been issued.
    has_initialized: bool,
    gateway: Option<Arc<dyn MortgageGateway>>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl fmt::Debug for MortgageApp {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MortgageApp")
            .field("portfolio", &self.portfolio)
            .field("form", &self.form)
            .field("focus", &self.focus)
            .field("in_flight", &self.in_flight)
            .field("error", &self.error)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_gateway", &self.gateway.is_some())
            .finish_non_exhaustive()
    }
}

impl MortgageApp {
    /// Creates a new application showing the given records.
    #[must_use]
    pub fn new(records: Vec<MortgageRecord>) -> Self {
        Self::with_dimensions(records, 80, 24)
    }

    /// Creates an application with explicit terminal dimensions.
    #[must_use]
    pub fn with_dimensions(records: Vec<MortgageRecord>, width: u16, height: u16) -> Self {
        Self {
            portfolio: PortfolioState::with_records(records),
            form: FormController::new(),
            inputs: FormInputs::new(),
            focus: Focus::List,
            in_flight: InFlightTracker::new(),
            error: None,
            notice: None,
            show_help: false,
            width,
            height,
            scroll_offset: 0,
            has_initialized: false,
            gateway: None,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Creates an empty application (for initial loading state).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Uses `gateway` for every network operation.
    #[must_use]
    pub fn with_gateway(mut self, gateway: Arc<dyn MortgageGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Sends telemetry events to `sink`.
    #[must_use]
    pub fn with_telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }

    /// Returns the records from the last successful fetch.
    #[must_use]
    pub fn records(&self) -> &[MortgageRecord] {
        self.portfolio.records()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.portfolio.cursor()
    }

    /// Returns the form controller.
    #[must_use]
    pub const fn form(&self) -> &FormController {
        &self.form
    }

    /// Returns the pane with keyboard focus.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the message in the status bar, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the confirmation of the last successful mutation, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether a network operation is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_busy()
    }

    /// Returns the current input context for context-aware key mapping.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.portfolio.pending_delete().is_some() {
            return InputContext::ConfirmDelete;
        }
        match self.focus {
            Focus::List => InputContext::List,
            Focus::Form => InputContext::Form,
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. User actions are ignored
    /// while a request is in flight; quit, help, resize, and command results
    /// always get through.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.in_flight.is_busy() && msg.is_blocked_while_busy() {
            tracing::debug!("ignoring {msg:?} while a request is in flight");
            return None;
        }
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_form() {
            return self.handle_form_msg(msg);
        }
        if msg.is_delete() {
            return self.handle_delete_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Returns the gateway, or shows an error when none is configured.
    fn require_gateway(&mut self) -> Option<Arc<dyn MortgageGateway>> {
        let gateway = self.gateway.clone();
        if gateway.is_none() {
            self.error = Some(NO_GATEWAY.to_owned());
        }
        gateway
    }

    fn record_telemetry(&self, event: TelemetryEvent) {
        self.telemetry.record(event);
    }

    /// Number of table rows that fit below the form.
    fn table_height(&self) -> usize {
        (self.height as usize)
            .saturating_sub(CHROME_HEIGHT + FORM_PANEL_HEIGHT)
            .max(MIN_TABLE_HEIGHT)
    }
}
