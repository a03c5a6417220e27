//! Integration tests against a mockito HTTP server.

use mockito::Matcher;
use snapapi::types::{BatchOptions, ScreenshotOptions};
use snapapi::{CancellationToken, Error, ErrorCode, PollPolicy, SnapClient};
use std::time::Duration;

fn test_client(base_url: &str) -> SnapClient {
    SnapClient::builder()
        .api_key("sk_test_123")
        .base_url(base_url)
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn screenshot_returns_body_bytes_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let fake_png = b"\x89PNG\r\n\x1a\nfake-image-bytes".to_vec();
    let mock = server
        .mock("POST", "/v1/screenshot")
        .match_header("x-api-key", "sk_test_123")
        .match_header("content-type", "application/json")
        .match_header("user-agent", Matcher::Regex("^snapapi-rust/".into()))
        .match_header("x-request-id", Matcher::Any)
        .match_body(Matcher::Json(serde_json::json!({
            "url": "https://example.com"
        })))
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(&fake_png)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let body = client
        .screenshot(&ScreenshotOptions::url("https://example.com"))
        .await
        .expect("screenshot should succeed");

    assert_eq!(body.as_ref(), fake_png.as_slice());
    mock.assert_async().await;
}

#[tokio::test]
async fn nested_error_body_is_classified() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/screenshot")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"code":"UNAUTHORIZED","message":"invalid API key"}}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client
        .screenshot(&ScreenshotOptions::url("https://example.com"))
        .await
        .unwrap_err();

    let api = err.as_api().expect("should be a service error");
    assert_eq!(api.code, ErrorCode::Unauthorized);
    assert_eq!(api.status, 401);
    assert_eq!(api.message, "invalid API key");
    assert!(!api.is_retryable());
}

#[tokio::test]
async fn flat_error_body_is_classified() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/screenshot")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"statusCode":429,"error":"RATE_LIMITED","message":"rate limit exceeded"}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client
        .screenshot(&ScreenshotOptions::url("https://example.com"))
        .await
        .unwrap_err();

    let api = err.as_api().unwrap();
    assert_eq!(api.code, ErrorCode::RateLimited);
    assert!(api.is_retryable());
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_http_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/screenshot")
        .with_status(503)
        .with_header("content-type", "text/html")
        .with_body("<html><body>Service Unavailable</body></html>")
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client
        .screenshot(&ScreenshotOptions::url("https://example.com"))
        .await
        .unwrap_err();

    let api = err.as_api().unwrap();
    assert_eq!(api.code, ErrorCode::HttpError);
    assert_eq!(api.message, "HTTP 503");
    assert_eq!(api.status, 503);
    assert!(api.is_retryable());
}

#[tokio::test]
async fn unreachable_host_is_a_connection_error() {
    // Nothing listens on port 1.
    let client = SnapClient::builder()
        .api_key("sk_test_123")
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client
        .screenshot(&ScreenshotOptions::url("https://example.com"))
        .await
        .unwrap_err();

    let api = err.as_api().unwrap();
    assert_eq!(api.code, ErrorCode::ConnectionError);
    assert_eq!(api.status, 0);
}

#[tokio::test]
async fn validation_fails_before_any_network_io() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/screenshot")
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client
        .screenshot(&ScreenshotOptions::default())
        .await
        .unwrap_err();

    let api = err.as_api().unwrap();
    assert_eq!(api.code, ErrorCode::InvalidParams);
    assert_eq!(api.status, 400);
    mock.assert_async().await;
}

#[tokio::test]
async fn status_400_with_parseable_body_is_never_success() {
    let mut server = mockito::Server::new_async().await;
    // A body that would parse as a perfectly valid usage payload.
    server
        .mock("GET", "/v1/usage")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"used":1,"limit":100,"remaining":99}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client.usage().await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.code, ErrorCode::HttpError);
    assert_eq!(api.status, 400);
}

#[tokio::test]
async fn screenshot_with_metadata_parses_json_envelope() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/screenshot")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "responseType": "json"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"success":true,"data":"aGVsbG8=","width":1280,"height":720,"fileSize":5,"took":812,"format":"png","cached":false}"#,
        )
        .create_async()
        .await;

    let client = test_client(&server.url());
    let result = client
        .screenshot_with_metadata(&ScreenshotOptions::url("https://example.com"))
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.width, 1280);
    assert_eq!(result.decode_data().unwrap(), b"hello");
}

#[tokio::test]
async fn malformed_success_body_is_a_local_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/usage")
        .with_status(200)
        .with_body("definitely not json")
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client.usage().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert!(err.as_api().is_none());
}

#[tokio::test]
async fn batch_submission_and_polling_complete() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/screenshot/batch")
        .with_status(200)
        .with_body(r#"{"success":true,"jobId":"job_42","status":"queued","total":2}"#)
        .create_async()
        .await;
    let status_mock = server
        .mock("GET", "/v1/screenshot/batch/job_42")
        .with_status(200)
        .with_body(r#"{"success":true,"jobId":"job_42","status":"completed","total":2,"completed":2,"failed":0}"#)
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let job = client
        .batch(&BatchOptions::urls(["https://a.example", "https://b.example"]))
        .await
        .unwrap();
    assert_eq!(job.job_id, "job_42");

    let policy = PollPolicy::new(Duration::from_millis(5), 5);
    let status = client
        .wait_for_batch(&job.job_id, &policy, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(status.completed, 2);
    status_mock.assert_async().await;
}

#[tokio::test]
async fn ping_parses_health_payload() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/ping")
        .with_status(200)
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let ping = client.ping().await.unwrap();
    assert_eq!(ping.status, "ok");
}
