//! Application telemetry events and sinks.
//!
//! The client records a few operational signals (refresh latency, mutation
//! outcomes, discarded stale responses) to support debugging. Nothing is
//! transmitted anywhere; the default sink forwards events to `tracing`.

use serde::{Deserialize, Serialize};

/// A structured telemetry event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// The portfolio was fetched and applied.
    PortfolioRefreshed {
        /// Number of records received.
        record_count: usize,
        /// Time from request start to response, in milliseconds.
        latency_ms: u64,
    },
    /// A create, update, or delete request finished.
    MutationCompleted {
        /// Operation label (`create`, `update`, or `delete`).
        operation: String,
        /// Whether the service accepted the request.
        succeeded: bool,
    },
    /// A response arrived for a superseded request and was dropped.
    StaleResponseDiscarded {
        /// Kind of request the response belonged to.
        request: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Forwards events to `tracing` as JSON at `info` level.
///
/// Events end up wherever the installed subscriber writes (the configured
/// log file), which keeps them off the terminal the TUI is drawing on.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        tracing::info!(target: "rmbs_desk::telemetry", "{serialised}");
    }
}
