//! Video capture operations.

use crate::client::core::SnapClient;
use crate::error::ApiError;
use crate::response;
use crate::types::screenshot::ResponseType;
use crate::types::video::{VideoOptions, VideoResult};
use crate::Result;
use bytes::Bytes;

impl SnapClient {
    /// Record a video of a webpage. `POST /v1/video`.
    ///
    /// Returns the raw video bytes.
    pub async fn video(&self, opts: &VideoOptions) -> Result<Bytes> {
        if opts.url.is_empty() {
            return Err(ApiError::invalid_params("URL is required").into());
        }
        self.post_bytes("/v1/video", opts).await
    }

    /// Record a video and return it with metadata.
    ///
    /// Forces `response_type: json`; the recording is in
    /// [`VideoResult::data`] as base64.
    pub async fn video_with_result(&self, opts: &VideoOptions) -> Result<VideoResult> {
        if opts.url.is_empty() {
            return Err(ApiError::invalid_params("URL is required").into());
        }
        let opts = VideoOptions {
            response_type: Some(ResponseType::Json),
            ..opts.clone()
        };
        let body = self.post_bytes("/v1/video", &opts).await?;
        response::parse_json(&body)
    }
}
