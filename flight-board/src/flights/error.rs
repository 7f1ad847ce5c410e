//! Flight-status client error types.

/// Errors from fetching flight-status pages.
///
/// Every variant is fatal for the page being fetched, and so for the whole
/// day/operation that page belongs to. Nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum FlightApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned a non-success HTTP status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// API answered 200 but reported a failure result code
    #[error("upstream error {code}: {message}")]
    Upstream { code: String, message: String },

    /// Invalid or missing service key
    #[error("unauthorized (invalid service key)")]
    Unauthorized,

    /// The client could not be configured
    #[error("not configured: {0}")]
    NotConfigured(String),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
