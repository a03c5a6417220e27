//! Screenshot and PDF capture options and results.

use super::common::{Cookie, DevicePreset, Geolocation, HttpAuth, ProxyConfig};
use super::is_false;
use crate::jobs::{JobState, JobStatus};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Output format for a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    Avif,
    Pdf,
}

/// How the service encodes the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Raw bytes of the captured asset.
    Binary,
    /// Base64 text of the captured asset.
    Base64,
    /// JSON envelope with base64 data plus metadata.
    Json,
}

/// PDF layout options, used with `format: pdf` or the dedicated PDF endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landscape: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_header_footer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_ranges: Option<String>,
    #[serde(rename = "preferCSSPageSize", skip_serializing_if = "Option::is_none")]
    pub prefer_css_page_size: Option<bool>,
}

/// Thumbnail generated alongside the main capture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailOptions {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<String>,
}

/// Which extra metadata to collect during the capture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status_code: Option<bool>,
}

/// Options for `POST /v1/screenshot`.
///
/// Exactly one of `url`, `html`, or `markdown` must be set; everything else
/// is passed through to the service verbatim. Absent fields are omitted from
/// the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<DevicePreset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_scale_factor: Option<f64>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_mobile: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub has_touch: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_landscape: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub full_page: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page_scroll_delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page_max_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector_scroll_into_view: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_selector_timeout: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub dark_mode: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub reduced_motion: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_selectors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_delay: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub block_ads: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub block_trackers: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub block_cookie_banners: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub block_chat_widgets: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_resources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<Cookie>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_auth: Option<HttpAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<Geolocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_options: Option<PdfOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ThumbnailOptions>,
    #[serde(skip_serializing_if = "is_false")]
    pub fail_on_http_error: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub cache: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    #[serde(skip_serializing_if = "is_false")]
    pub include_metadata: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_metadata: Option<MetadataFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_if_content_missing: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_if_content_contains: Option<Vec<String>>,
}

impl ScreenshotOptions {
    /// Capture a live URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Render raw HTML instead of loading a URL.
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    /// Render Markdown instead of loading a URL.
    pub fn markdown(markdown: impl Into<String>) -> Self {
        Self {
            markdown: Some(markdown.into()),
            ..Default::default()
        }
    }

    pub(crate) fn has_source(&self) -> bool {
        self.url.is_some() || self.html.is_some() || self.markdown.is_some()
    }
}

/// Page metadata returned when `include_metadata` is set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub http_status_code: Option<u16>,
    pub fonts: Vec<String>,
    pub colors: Vec<String>,
    pub links: Vec<String>,
}

/// JSON envelope returned for `response_type: json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenshotResult {
    pub success: bool,
    /// Base64-encoded capture; see [`ScreenshotResult::decode_data`].
    pub data: String,
    pub width: u32,
    pub height: u32,
    pub file_size: u64,
    /// Server-side render time in milliseconds.
    pub took: u64,
    pub format: String,
    pub cached: bool,
    pub metadata: Option<PageMetadata>,
    /// Base64-encoded thumbnail when one was requested.
    pub thumbnail: Option<String>,
}

impl ScreenshotResult {
    /// Decode the base64 `data` payload into raw image bytes.
    pub fn decode_data(&self) -> crate::Result<Vec<u8>> {
        Ok(base64::engine::general_purpose::STANDARD.decode(&self.data)?)
    }
}

/// Options for `POST /v1/pdf`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfDocumentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_options: Option<PdfOptions>,
}

impl PdfDocumentOptions {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    pub(crate) fn has_source(&self) -> bool {
        self.url.is_some() || self.html.is_some() || self.markdown.is_some()
    }
}

/// Acknowledgement for an asynchronous screenshot submission.
///
/// `job_id` is absent when the service answered synchronously; the payload is
/// then already in `result`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AsyncJob {
    pub success: bool,
    pub job_id: Option<String>,
    pub status: Option<String>,
    pub result: Option<ScreenshotResult>,
}

/// Status of an asynchronous screenshot job.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenshotJobStatus {
    pub success: bool,
    pub job_id: String,
    pub status: String,
    /// Failure reason when `status` is `failed`.
    pub error: Option<String>,
    pub result: Option<ScreenshotResult>,
    pub created_at: Option<String>,
    pub completed_at: Option<String>,
}

impl JobStatus for ScreenshotJobStatus {
    fn state(&self) -> JobState {
        JobState::from_wire(&self.status)
    }

    fn failure_reason(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
