//! rmbs-desk library crate: a terminal client for a mortgage-records
//! service.
//!
//! The library wraps a `reqwest` client for the service's REST API, keeps
//! the client-side form and portfolio state, and renders both in a
//! bubbletea-rs terminal UI. Every rating is computed by the service; the
//! client only validates input and displays what it is given.

pub mod api;
pub mod config;
pub mod logging;
pub mod portfolio;
pub mod telemetry;
pub mod tui;

pub use api::{
    ApiError, HttpMortgageGateway, LoanType, MortgageFields, MortgageGateway, MortgageId,
    MortgageRecord, PortfolioRating, PropertyType, Rating,
};
pub use config::{OperationMode, RmbsDeskConfig};
pub use portfolio::{FormController, PortfolioState};
pub use telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink, TracingTelemetrySink};
