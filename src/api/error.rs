//! Error types exposed by the mortgage API layer.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the mortgage
/// service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The configured API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// Networking failed before a response was received.
    #[error("network error talking to the mortgage service: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The service answered with a non-success status.
    #[error(
        "{operation} failed with status {status}: {}",
        .message.as_deref().unwrap_or("no error message")
    )]
    Server {
        /// Operation that was attempted (e.g. `create mortgage`).
        operation: String,
        /// HTTP status code returned by the service.
        status: u16,
        /// Value of the `error` field in the response body, if any.
        message: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("{operation} returned an unreadable response: {message}")]
    Decode {
        /// Operation that was attempted.
        operation: String,
        /// Decoder error detail.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ApiError {
    /// Returns the service-provided `error` message, if the failure carried
    /// one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Returns the message to show the user: the service's own `error`
    /// string when present, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}
