//! Batch screenshot submission and tracking.

use crate::client::core::SnapClient;
use crate::error::ApiError;
use crate::jobs::{self, JobHandle, PollPolicy};
use crate::types::batch::{BatchOptions, BatchResult, BatchStatus};
use crate::Result;
use tokio_util::sync::CancellationToken;

impl SnapClient {
    /// Submit a batch of URLs for capture. `POST /v1/screenshot/batch`.
    ///
    /// Returns immediately with a job id; track it with
    /// [`SnapClient::batch_status`] or [`SnapClient::wait_for_batch`].
    pub async fn batch(&self, opts: &BatchOptions) -> Result<BatchResult> {
        if opts.urls.is_empty() {
            return Err(ApiError::invalid_params("URLs are required").into());
        }
        self.post_json("/v1/screenshot/batch", opts).await
    }

    /// Fetch the status of a batch job. `GET /v1/screenshot/batch/{job_id}`.
    pub async fn batch_status(&self, job_id: &str) -> Result<BatchStatus> {
        if job_id.is_empty() {
            return Err(ApiError::invalid_params("job id is required").into());
        }
        self.get_json(&format!("/v1/screenshot/batch/{job_id}")).await
    }

    /// Poll a batch job until it completes or fails.
    ///
    /// See [`jobs::poll_job`] for the timeout and cancellation semantics.
    pub async fn wait_for_batch(
        &self,
        job_id: &str,
        policy: &PollPolicy,
        cancel: &CancellationToken,
    ) -> Result<BatchStatus> {
        let handle = JobHandle::batch(job_id);
        jobs::poll_job(&handle, policy, cancel, || self.batch_status(job_id)).await
    }
}
