//! # snapapi
//!
//! Rust client for the SnapAPI page-rendering service: screenshots, PDFs,
//! video captures, content extraction, and AI analysis over an authenticated
//! HTTP API.
//!
//! ## Overview
//!
//! The client turns typed request options into authenticated HTTP calls,
//! decodes the service's heterogeneous response shapes (raw bytes, base64,
//! JSON-with-metadata), classifies failures into a stable error taxonomy, and
//! tracks long-running jobs (batch captures, async screenshots) to
//! completion.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use snapapi::SnapClient;
//! use snapapi::types::ScreenshotOptions;
//!
//! #[tokio::main]
//! async fn main() -> snapapi::Result<()> {
//!     let client = SnapClient::new("sk_live_xxx")?;
//!
//!     let png = client
//!         .screenshot(&ScreenshotOptions {
//!             full_page: true,
//!             ..ScreenshotOptions::url("https://example.com")
//!         })
//!         .await?;
//!     std::fs::write("screenshot.png", &png)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failure surfaces as [`Error`]. Service-reported failures (and
//! connection failures, synthesized with status 0) carry an [`ApiError`]
//! with an [`ErrorCode`] and the HTTP status; local failures (serialization,
//! response decoding, configuration) never carry a taxonomy code. Retry is
//! opt-in via [`resilience::retry::with_retry`]:
//!
//! ```rust,no_run
//! use snapapi::{with_retry, CancellationToken, RetryPolicy, SnapClient};
//! use snapapi::types::ScreenshotOptions;
//! use std::time::Duration;
//!
//! # async fn run(client: SnapClient) -> snapapi::Result<()> {
//! let opts = ScreenshotOptions::url("https://example.com");
//! // The service's rate-limit window resets after ~65s on the free plan.
//! let policy = RetryPolicy::fixed(2, Duration::from_secs(65));
//! let png = with_retry(&policy, &CancellationToken::new(), || {
//!     client.screenshot(&opts)
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, and per-endpoint operations |
//! | [`types`] | Request options and response records |
//! | [`jobs`] | Generic polling for server-side jobs |
//! | [`resilience`] | Opt-in retry with backoff |
//! | [`transport`] | Authenticated HTTP dispatch |
//! | [`error`] / [`error_code`] | Error taxonomy and classification |

pub mod client;
pub mod error_code;
pub mod jobs;
pub mod resilience;
pub mod transport;
pub mod types;

mod response;

// Re-export main types for convenience
pub use client::{SnapClient, SnapClientBuilder};
pub use error_code::ErrorCode;
pub use jobs::{JobHandle, JobKind, JobState, JobStatus, PollPolicy};
pub use resilience::retry::{with_retry, RetryPolicy};

// Cancellation signal accepted by the retry wrapper and the job poller.
pub use tokio_util::sync::CancellationToken;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the library
pub mod error;
pub use error::{ApiError, Error};
