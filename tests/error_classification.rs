//! Tests for error classification logic.

use snapapi::{ApiError, ErrorCode};

#[test]
fn retryable_code_status_pairs() {
    // Retryable iff code is RATE_LIMITED or TIMEOUT, or status >= 500.
    let retryable = vec![
        (ErrorCode::RateLimited, 429),
        (ErrorCode::Timeout, 408),
        (ErrorCode::Timeout, 504),
        (ErrorCode::CaptureFailed, 500),
        (ErrorCode::HttpError, 502),
        (ErrorCode::HttpError, 503),
        (ErrorCode::ConnectionError, 500),
    ];

    for (code, status) in retryable {
        let err = ApiError::new(code, "test", status);
        assert!(
            err.is_retryable(),
            "({}, {status}) should be retryable",
            code.as_str()
        );
    }
}

#[test]
fn non_retryable_code_status_pairs() {
    let non_retryable = vec![
        (ErrorCode::InvalidUrl, 400),
        (ErrorCode::InvalidParams, 400),
        (ErrorCode::Unauthorized, 401),
        (ErrorCode::Forbidden, 403),
        (ErrorCode::QuotaExceeded, 402),
        (ErrorCode::CaptureFailed, 422),
        (ErrorCode::HttpError, 404),
        // No response received at all: resending blindly is not safe to
        // assume useful, and the status carries no server-error signal.
        (ErrorCode::ConnectionError, 0),
    ];

    for (code, status) in non_retryable {
        let err = ApiError::new(code, "test", status);
        assert!(
            !err.is_retryable(),
            "({}, {status}) should NOT be retryable",
            code.as_str()
        );
    }
}

#[test]
fn server_status_overrides_code() {
    // code and status are independent signals; a 5xx is retryable even when
    // the code alone would not be.
    let err = ApiError::new(ErrorCode::QuotaExceeded, "test", 500);
    assert!(err.is_retryable());
}

#[test]
fn classification_is_pure_over_unknown_codes() {
    let err = ApiError::from_wire("BROWSER_CRASHED", "renderer died", 500, None);
    assert_eq!(err.code, ErrorCode::HttpError);
    assert!(err.is_retryable());

    let err = ApiError::from_wire("BROWSER_CRASHED", "renderer died", 422, None);
    assert!(!err.is_retryable());
}
