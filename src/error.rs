use crate::error_code::ErrorCode;
use thiserror::Error;

/// Structured detail entries attached to some service errors
/// (e.g. per-field validation messages).
pub type Details = Vec<serde_json::Map<String, serde_json::Value>>;

/// Error reported by the SnapAPI service.
///
/// Produced whenever the service responded with status >= 400, or when a
/// connection could not be established at all (`status` is then 0). The
/// `code` and `status` are independent signals; retry classification
/// consults both.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[{raw_code}] {message} (HTTP {status}){}", format_details(.details))]
pub struct ApiError {
    /// Classified error code.
    pub code: ErrorCode,
    /// Wire code string as reported by the service. Equals `code.as_str()`
    /// for known codes; preserved verbatim for codes this client predates.
    pub raw_code: String,
    /// Human-readable message from the service.
    pub message: String,
    /// HTTP status of the response, or 0 when no response was received.
    pub status: u16,
    /// Optional structured details (per-field validation errors and similar).
    pub details: Option<Details>,
}

fn format_details(details: &Option<Details>) -> String {
    match details {
        Some(d) if !d.is_empty() => format!(
            ": {}",
            serde_json::to_string(d).unwrap_or_else(|_| "<unprintable details>".into())
        ),
        _ => String::new(),
    }
}

impl ApiError {
    /// Create an error with a known code.
    pub fn new(code: ErrorCode, message: impl Into<String>, status: u16) -> Self {
        Self {
            code,
            raw_code: code.as_str().to_string(),
            message: message.into(),
            status,
            details: None,
        }
    }

    /// Create an error from a wire code string, preserving unknown codes.
    pub fn from_wire(
        raw_code: impl Into<String>,
        message: impl Into<String>,
        status: u16,
        details: Option<Details>,
    ) -> Self {
        let raw_code = raw_code.into();
        Self {
            code: ErrorCode::from_wire(&raw_code).unwrap_or(ErrorCode::HttpError),
            raw_code,
            message: message.into(),
            status,
            details,
        }
    }

    /// Client-side validation failure, reported before any network I/O.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParams, message, 400)
    }

    /// Transport-level failure before any response was received.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConnectionError, message, 0)
    }

    /// Returns whether resending the same request may succeed.
    ///
    /// Retryable iff the code is `RATE_LIMITED` or `TIMEOUT`, or the HTTP
    /// status is a server error (>= 500) regardless of code. Pure; performs
    /// no I/O.
    pub fn is_retryable(&self) -> bool {
        self.code.retryable() || self.status >= 500
    }
}

/// Unified error type for the client.
///
/// Two disjoint families: [`Error::Api`] carries a service-reported (or
/// connection-synthesized) [`ApiError`] with a taxonomy code; every other
/// variant is a local failure and never carries a taxonomy code.
#[derive(Debug, Error)]
pub enum Error {
    /// Error reported by the service, or synthesized for connection failures.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request body could not be serialized. A local programming error.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A success response body could not be parsed into the expected shape.
    #[error("failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The response body could not be read off the wire.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// A base64 payload inside a JSON result could not be decoded.
    #[error("failed to decode base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Client construction failed (bad base URL, missing API key, ...).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O failure while handling a payload locally.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operation was cancelled before completion.
    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Returns the service error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api) => Some(api),
            _ => None,
        }
    }

    /// Returns whether resending the underlying request may succeed.
    /// Local errors are never retryable.
    pub fn is_retryable(&self) -> bool {
        self.as_api().is_some_and(ApiError::is_retryable)
    }
}
