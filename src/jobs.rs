//! Asynchronous job tracking.
//!
//! Batch captures and async screenshots run as server-side jobs identified by
//! an opaque id. [`poll_job`] drives any such job to a terminal state through
//! a caller-supplied status fetch, so the wait/timeout policy lives in one
//! place instead of being re-implemented per endpoint.
//!
//! ## Example
//!
//! ```rust,no_run
//! use snapapi::{CancellationToken, PollPolicy, SnapClient};
//! use snapapi::types::BatchOptions;
//!
//! # async fn run() -> snapapi::Result<()> {
//! let client = SnapClient::new("sk_live_xxx")?;
//! let job = client.batch(&BatchOptions::urls(["https://example.com"])).await?;
//! let status = client
//!     .wait_for_batch(&job.job_id, &PollPolicy::default(), &CancellationToken::new())
//!     .await?;
//! println!("{}/{} completed", status.completed, status.total);
//! # Ok(())
//! # }
//! ```

use crate::error::{ApiError, Error};
use crate::error_code::ErrorCode;
use crate::Result;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Kind of server-side job a handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    /// Batch screenshot set submitted via `POST /v1/screenshot/batch`.
    BatchCapture,
    /// Single asynchronous screenshot submitted via `POST /v1/screenshot/async`.
    AsyncCapture,
}

/// Handle to one server-side job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    pub job_id: String,
    pub kind: JobKind,
}

impl JobHandle {
    pub fn batch(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            kind: JobKind::BatchCapture,
        }
    }

    pub fn async_capture(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            kind: JobKind::AsyncCapture,
        }
    }
}

/// Lifecycle state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Queued,
    Processing,
    Completed,
    Failed,
}

impl JobState {
    /// Map a wire status string to a state.
    ///
    /// Only `completed` and `failed` terminate polling; anything the service
    /// may add later maps to `Processing` so the loop keeps going.
    pub fn from_wire(status: &str) -> Self {
        match status {
            "queued" => Self::Queued,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Processing,
        }
    }

    /// Whether no further polling is meaningful.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Anything a status fetch can return.
pub trait JobStatus {
    fn state(&self) -> JobState;

    /// Service-reported reason when the job failed.
    fn failure_reason(&self) -> Option<&str> {
        None
    }
}

/// How often and how long to poll.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Pause between status fetches.
    pub interval: Duration,
    /// Maximum number of status fetches before giving up.
    pub max_attempts: u32,
    /// Optional absolute budget measured from the start of polling.
    pub deadline: Option<Duration>,
}

impl PollPolicy {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_attempts: 15,
            deadline: None,
        }
    }
}

fn budget_exhausted(handle: &JobHandle, policy: &PollPolicy) -> Error {
    Error::Api(ApiError::new(
        ErrorCode::Timeout,
        format!(
            "job {} did not reach a terminal state within {} attempts; it may still be running server-side",
            handle.job_id, policy.max_attempts
        ),
        0,
    ))
}

/// Poll a job until it reaches a terminal state.
///
/// Each iteration suspends for `policy.interval`, then runs `fetch` once —
/// never more than one in-flight fetch per handle. `Completed` returns the
/// final status; `Failed` returns a `CAPTURE_FAILED` error carrying the
/// service-reported reason; an exhausted attempt or deadline budget returns a
/// `TIMEOUT` error (the job may still be running server-side). Errors from
/// `fetch` itself propagate immediately and are not retried here — compose
/// with [`crate::resilience::retry::with_retry`] for that.
///
/// Cancelling `cancel` aborts promptly between iterations.
pub async fn poll_job<S, F, Fut>(
    handle: &JobHandle,
    policy: &PollPolicy,
    cancel: &CancellationToken,
    mut fetch: F,
) -> Result<S>
where
    S: JobStatus,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<S>>,
{
    let deadline = policy.deadline.map(|d| Instant::now() + d);

    for attempt in 1..=policy.max_attempts {
        if let Some(deadline) = deadline {
            if Instant::now() + policy.interval >= deadline {
                return Err(budget_exhausted(handle, policy));
            }
        }

        tokio::select! {
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            _ = tokio::time::sleep(policy.interval) => {}
        }

        let status = fetch().await?;
        match status.state() {
            JobState::Completed => {
                debug!(job_id = handle.job_id.as_str(), attempt, "job completed");
                return Ok(status);
            }
            JobState::Failed => {
                let reason = status
                    .failure_reason()
                    .unwrap_or("job reported failure")
                    .to_string();
                debug!(job_id = handle.job_id.as_str(), attempt, reason = reason.as_str(), "job failed");
                return Err(Error::Api(ApiError::new(ErrorCode::CaptureFailed, reason, 0)));
            }
            JobState::Queued | JobState::Processing => {
                debug!(job_id = handle.job_id.as_str(), attempt, "job still running");
            }
        }
    }

    Err(budget_exhausted(handle, policy))
}
