//! Backend API errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when calling the Tableside backend.
///
/// `Display` is the short message shown to staff in the affected form
/// section; the underlying transport error stays available as the source.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Unable to reach the server")]
    Transport(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// The backend answered successfully but the body did not parse.
    #[error("Unexpected response from the server")]
    Decode(#[source] reqwest::Error),

    /// An endpoint URL could not be built from the configured base.
    #[error("Invalid API endpoint: {0}")]
    Endpoint(String),
}

impl ApiError {
    /// HTTP status returned by the backend, if any.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pick the user-facing message for a failed response.
///
/// Order: the body's `message` field, then its `error` field, then the
/// status reason phrase, then `fallback`.
pub(crate) fn extract_error_message(status: StatusCode, body: &[u8], fallback: &str) -> String {
    let from_body = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"].into_iter().find_map(|key| {
                value
                    .get(key)
                    .and_then(serde_json::Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
            })
        });

    from_body
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| fallback.to_owned())
}
