//! Canonical SnapAPI error codes.
//!
//! The service reports every failure as a string code plus an HTTP status.
//! Each known code maps to one variant here; codes the service may add later
//! fall back to [`ErrorCode::HttpError`] while the raw string is preserved on
//! [`crate::ApiError`].
//!
//! ## Example
//!
//! ```rust
//! use snapapi::ErrorCode;
//!
//! let code = ErrorCode::from_wire("RATE_LIMITED").unwrap();
//! assert!(code.retryable());
//! assert_eq!(code.as_str(), "RATE_LIMITED");
//! ```

use std::fmt;

/// Error code reported by the SnapAPI service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The target URL was rejected by the service.
    InvalidUrl,
    /// Malformed request, missing required fields, or out-of-range values.
    InvalidParams,
    /// Invalid, expired, or missing API key.
    Unauthorized,
    /// Valid credentials but the plan does not allow the requested feature.
    Forbidden,
    /// Monthly usage quota or billing limit reached.
    QuotaExceeded,
    /// Request rate limit exceeded.
    RateLimited,
    /// The capture timed out before completing.
    Timeout,
    /// The page loaded but the capture itself failed.
    CaptureFailed,
    /// No response was received (DNS, TCP, TLS, or client-side timeout).
    ConnectionError,
    /// The error body could not be parsed; only the HTTP status is known.
    HttpError,
}

impl ErrorCode {
    /// Returns the wire name (e.g. `"RATE_LIMITED"`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidUrl => "INVALID_URL",
            Self::InvalidParams => "INVALID_PARAMS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::QuotaExceeded => "QUOTA_EXCEEDED",
            Self::RateLimited => "RATE_LIMITED",
            Self::Timeout => "TIMEOUT",
            Self::CaptureFailed => "CAPTURE_FAILED",
            Self::ConnectionError => "CONNECTION_ERROR",
            Self::HttpError => "HTTP_ERROR",
        }
    }

    /// Maps a wire code string to the corresponding `ErrorCode`.
    ///
    /// Returns `None` for codes this client does not know about.
    pub fn from_wire(code: &str) -> Option<Self> {
        let code = match code {
            "INVALID_URL" => Self::InvalidUrl,
            "INVALID_PARAMS" => Self::InvalidParams,
            "UNAUTHORIZED" => Self::Unauthorized,
            "FORBIDDEN" => Self::Forbidden,
            "QUOTA_EXCEEDED" => Self::QuotaExceeded,
            "RATE_LIMITED" => Self::RateLimited,
            "TIMEOUT" => Self::Timeout,
            "CAPTURE_FAILED" => Self::CaptureFailed,
            "CONNECTION_ERROR" => Self::ConnectionError,
            "HTTP_ERROR" => Self::HttpError,
            _ => return None,
        };
        Some(code)
    }

    /// Returns whether this code is retryable on its own.
    ///
    /// The full retry decision also considers the HTTP status; see
    /// [`crate::ApiError::is_retryable`].
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Timeout)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        let codes = [
            ErrorCode::InvalidUrl,
            ErrorCode::InvalidParams,
            ErrorCode::Unauthorized,
            ErrorCode::Forbidden,
            ErrorCode::QuotaExceeded,
            ErrorCode::RateLimited,
            ErrorCode::Timeout,
            ErrorCode::CaptureFailed,
            ErrorCode::ConnectionError,
            ErrorCode::HttpError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::from_wire(code.as_str()), Some(code));
        }
    }

    #[test]
    fn unknown_wire_code_is_none() {
        assert_eq!(ErrorCode::from_wire("SOMETHING_NEW"), None);
        assert_eq!(ErrorCode::from_wire(""), None);
    }

    #[test]
    fn only_rate_limited_and_timeout_are_code_retryable() {
        assert!(ErrorCode::RateLimited.retryable());
        assert!(ErrorCode::Timeout.retryable());
        for code in [
            ErrorCode::InvalidUrl,
            ErrorCode::InvalidParams,
            ErrorCode::Unauthorized,
            ErrorCode::Forbidden,
            ErrorCode::QuotaExceeded,
            ErrorCode::CaptureFailed,
            ErrorCode::ConnectionError,
            ErrorCode::HttpError,
        ] {
            assert!(!code.retryable(), "{code} should not be retryable");
        }
    }
}
