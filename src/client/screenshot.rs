//! Screenshot, PDF, and async capture operations.

use crate::client::core::SnapClient;
use crate::error::ApiError;
use crate::jobs::{self, JobHandle, PollPolicy};
use crate::response;
use crate::types::common::DevicePreset;
use crate::types::screenshot::{
    AsyncJob, ImageFormat, PdfDocumentOptions, PdfOptions, ResponseType, ScreenshotJobStatus,
    ScreenshotOptions, ScreenshotResult,
};
use crate::Result;
use bytes::Bytes;
use tokio_util::sync::CancellationToken;

impl SnapClient {
    /// Capture a screenshot of a URL, HTML, or Markdown document.
    ///
    /// Returns the raw image bytes. For the JSON envelope with dimensions and
    /// page metadata use [`SnapClient::screenshot_with_metadata`].
    pub async fn screenshot(&self, opts: &ScreenshotOptions) -> Result<Bytes> {
        if !opts.has_source() {
            return Err(ApiError::invalid_params("url, html, or markdown is required").into());
        }
        self.post_bytes("/v1/screenshot", opts).await
    }

    /// Capture a screenshot and return it with metadata.
    ///
    /// Forces `response_type: json`; the capture itself is in
    /// [`ScreenshotResult::data`] as base64.
    pub async fn screenshot_with_metadata(
        &self,
        opts: &ScreenshotOptions,
    ) -> Result<ScreenshotResult> {
        let opts = ScreenshotOptions {
            response_type: Some(ResponseType::Json),
            ..opts.clone()
        };
        let body = self.screenshot(&opts).await?;
        response::parse_json(&body)
    }

    /// Capture a screenshot of raw HTML content.
    pub async fn screenshot_from_html(
        &self,
        html: &str,
        opts: Option<ScreenshotOptions>,
    ) -> Result<Bytes> {
        if html.is_empty() {
            return Err(ApiError::invalid_params("HTML content is required").into());
        }
        let opts = ScreenshotOptions {
            html: Some(html.to_string()),
            url: None,
            ..opts.unwrap_or_default()
        };
        self.post_bytes("/v1/screenshot", &opts).await
    }

    /// Capture a screenshot of rendered Markdown content.
    pub async fn screenshot_from_markdown(
        &self,
        markdown: &str,
        opts: Option<ScreenshotOptions>,
    ) -> Result<Bytes> {
        if markdown.is_empty() {
            return Err(ApiError::invalid_params("Markdown content is required").into());
        }
        let opts = ScreenshotOptions {
            markdown: Some(markdown.to_string()),
            url: None,
            html: None,
            ..opts.unwrap_or_default()
        };
        self.post_bytes("/v1/screenshot", &opts).await
    }

    /// Capture a screenshot using a device preset.
    pub async fn screenshot_device(
        &self,
        url: &str,
        device: DevicePreset,
        opts: Option<ScreenshotOptions>,
    ) -> Result<Bytes> {
        if url.is_empty() {
            return Err(ApiError::invalid_params("URL is required").into());
        }
        let opts = ScreenshotOptions {
            url: Some(url.to_string()),
            device: Some(device),
            ..opts.unwrap_or_default()
        };
        self.post_bytes("/v1/screenshot", &opts).await
    }

    /// Generate a PDF through the screenshot endpoint.
    pub async fn pdf(&self, opts: &ScreenshotOptions) -> Result<Bytes> {
        if !opts.has_source() {
            return Err(ApiError::invalid_params("url, html, or markdown is required").into());
        }
        let opts = ScreenshotOptions {
            format: Some(ImageFormat::Pdf),
            response_type: Some(ResponseType::Binary),
            ..opts.clone()
        };
        self.post_bytes("/v1/screenshot", &opts).await
    }

    /// Generate a PDF from HTML content.
    pub async fn pdf_from_html(&self, html: &str, pdf_options: Option<PdfOptions>) -> Result<Bytes> {
        if html.is_empty() {
            return Err(ApiError::invalid_params("HTML content is required").into());
        }
        let opts = ScreenshotOptions {
            html: Some(html.to_string()),
            format: Some(ImageFormat::Pdf),
            response_type: Some(ResponseType::Binary),
            pdf_options,
            ..Default::default()
        };
        self.post_bytes("/v1/screenshot", &opts).await
    }

    /// Generate a PDF through the dedicated PDF endpoint. `POST /v1/pdf`.
    pub async fn pdf_document(&self, opts: &PdfDocumentOptions) -> Result<Bytes> {
        if !opts.has_source() {
            return Err(ApiError::invalid_params("url, html, or markdown is required").into());
        }
        self.post_bytes("/v1/pdf", opts).await
    }

    /// Submit a screenshot for asynchronous capture. `POST /v1/screenshot/async`.
    ///
    /// The returned [`AsyncJob::job_id`] is polled via
    /// [`SnapClient::screenshot_status`]; it is absent when the service
    /// answered synchronously.
    pub async fn screenshot_async(&self, opts: &ScreenshotOptions) -> Result<AsyncJob> {
        if !opts.has_source() {
            return Err(ApiError::invalid_params("url, html, or markdown is required").into());
        }
        self.post_json("/v1/screenshot/async", opts).await
    }

    /// Fetch the status of an asynchronous screenshot job.
    /// `GET /v1/screenshot/async/{job_id}`.
    pub async fn screenshot_status(&self, job_id: &str) -> Result<ScreenshotJobStatus> {
        if job_id.is_empty() {
            return Err(ApiError::invalid_params("job id is required").into());
        }
        self.get_json(&format!("/v1/screenshot/async/{job_id}")).await
    }

    /// Poll an asynchronous screenshot job until it completes or fails.
    ///
    /// See [`jobs::poll_job`] for the timeout and cancellation semantics.
    pub async fn wait_for_screenshot(
        &self,
        job_id: &str,
        policy: &PollPolicy,
        cancel: &CancellationToken,
    ) -> Result<ScreenshotJobStatus> {
        let handle = JobHandle::async_capture(job_id);
        jobs::poll_job(&handle, policy, cancel, || self.screenshot_status(job_id)).await
    }
}
