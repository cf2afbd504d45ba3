use thiserror::Error;

/// Closed error taxonomy for the analysis and feedback clients.
///
/// Every failure path maps to exactly one member; raw transport errors are
/// never surfaced directly to callers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Endpoint construction failed. Static misconfiguration; should not
    /// occur at runtime with a correct base URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be serialized.
    #[error("request encoding error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Transport-level failure: DNS, timeout, connection reset.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response was not a well-formed HTTP response (e.g. the body
    /// stream broke off mid-read).
    #[error("malformed HTTP response: {0}")]
    InvalidResponse(#[source] reqwest::Error),

    /// HTTP status outside 200–299.
    #[error("server returned HTTP {status}")]
    Server { status: u16 },

    /// The response body did not match the expected schema.
    #[error("response decoding error for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Catch-all for unclassified failures, e.g. the underlying HTTP client
    /// could not be constructed.
    #[error("unclassified client error: {0}")]
    Unknown(String),
}
