//! Tests for the retry wrapper, using stubbed operations.

use snapapi::{with_retry, ApiError, CancellationToken, Error, ErrorCode, RetryPolicy};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn fast_policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy::fixed(max_retries, Duration::from_millis(2))
}

#[tokio::test]
async fn rate_limited_once_then_success_retries_exactly_once() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    let value = with_retry(&fast_policy(3), &CancellationToken::new(), || {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if n == 1 {
                Err(Error::Api(ApiError::new(
                    ErrorCode::RateLimited,
                    "rate limit exceeded",
                    429,
                )))
            } else {
                Ok(42u32)
            }
        }
    })
    .await
    .expect("second attempt should succeed");

    assert_eq!(value, 42);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unauthorized_is_never_retried() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    let err = with_retry::<u32, _, _>(&fast_policy(3), &CancellationToken::new(), || {
        counter.fetch_add(1, Ordering::SeqCst);
        async {
            Err(Error::Api(ApiError::new(
                ErrorCode::Unauthorized,
                "invalid API key",
                401,
            )))
        }
    })
    .await
    .unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(err.as_api().unwrap().code, ErrorCode::Unauthorized);
}

#[tokio::test]
async fn exhausted_retries_return_last_error() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    let err = with_retry::<u32, _, _>(&fast_policy(2), &CancellationToken::new(), || {
        counter.fetch_add(1, Ordering::SeqCst);
        async {
            Err(Error::Api(ApiError::new(
                ErrorCode::HttpError,
                "HTTP 503",
                503,
            )))
        }
    })
    .await
    .unwrap_err();

    // Initial attempt plus two retries.
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    let api = err.as_api().unwrap();
    assert_eq!(api.status, 503);
}

#[tokio::test]
async fn local_errors_are_not_retried() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    let err = with_retry::<u32, _, _>(&fast_policy(3), &CancellationToken::new(), || {
        counter.fetch_add(1, Ordering::SeqCst);
        async { Err(Error::Config("bad setup".into())) }
    })
    .await
    .unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(matches!(err, Error::Config(_)));
}

#[tokio::test]
async fn cancellation_interrupts_the_backoff_wait() {
    let cancel = CancellationToken::new();
    let policy = RetryPolicy::fixed(3, Duration::from_secs(65));

    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        canceller.cancel();
    });

    let start = Instant::now();
    let err = with_retry::<u32, _, _>(&policy, &cancel, || async {
        Err(Error::Api(ApiError::new(
            ErrorCode::RateLimited,
            "rate limit exceeded",
            429,
        )))
    })
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Cancelled));
    assert!(start.elapsed() < Duration::from_secs(5));
}
