//! Terminal User Interface for managing the mortgage portfolio.
//!
//! This module provides an interactive TUI for browsing mortgage records,
//! editing them in a form, and deleting them after confirmation, using the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::MortgageApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! Network calls run as commands whose results come back as messages, each
//! carrying the request ticket it was issued under.
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Form input buffers and focus
//! - [`components`]: Table, form, and badge rendering
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Service Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway and telemetry sink are stored at module level. Call
//! [`set_gateway`] (and optionally [`set_telemetry_sink`]) before starting
//! the program; `MortgageApp::init()` picks them up.

use std::sync::{Arc, OnceLock};

use crate::api::MortgageGateway;
use crate::telemetry::TelemetrySink;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::MortgageApp;

/// Gateway used by the running program.
static GATEWAY: OnceLock<Arc<dyn MortgageGateway>> = OnceLock::new();

/// Telemetry sink used by the running program.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Sets the gateway the TUI talks to.
///
/// Returns `true` if the gateway was set, `false` if one was already set.
pub fn set_gateway(gateway: Arc<dyn MortgageGateway>) -> bool {
    GATEWAY.set(gateway).is_ok()
}

/// Sets the sink that receives telemetry events from the TUI.
///
/// Returns `true` if the sink was set, `false` if one was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Returns the stored gateway, if any.
pub(crate) fn stored_gateway() -> Option<Arc<dyn MortgageGateway>> {
    GATEWAY.get().cloned()
}

/// Returns the stored telemetry sink, if any.
pub(crate) fn stored_telemetry_sink() -> Option<Arc<dyn TelemetrySink>> {
    TELEMETRY_SINK.get().cloned()
}
