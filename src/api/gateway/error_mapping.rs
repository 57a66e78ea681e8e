//! Error mapping helpers for the HTTP mortgage gateway.

use crate::api::error::ApiError;

/// Maps a transport-level `reqwest` failure into an [`ApiError`].
pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> ApiError {
    if error.is_decode() {
        return ApiError::Decode {
            operation: operation.to_owned(),
            message: error.to_string(),
        };
    }

    if error.is_timeout() {
        return ApiError::Network {
            message: format!("{operation} timed out: {error}"),
        };
    }

    ApiError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Extracts the `error` string from a JSON error body, if present.
pub(super) fn extract_error_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
