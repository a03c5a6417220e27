//! Video capture options and results.

use super::common::{Cookie, DevicePreset};
use super::is_false;
use super::screenshot::ResponseType;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Easing applied to the scroll animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollEasing {
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "ease_in")]
    EaseIn,
    #[serde(rename = "ease_out")]
    EaseOut,
    #[serde(rename = "ease_in_out")]
    EaseInOut,
    #[serde(rename = "ease_in_out_quint")]
    EaseInOutQuint,
}

/// Options for `POST /v1/video`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoOptions {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<DevicePreset>,
    /// Recording length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_selector: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub dark_mode: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub block_ads: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub block_cookie_banners: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_selectors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<Cookie>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    #[serde(skip_serializing_if = "is_false")]
    pub scroll: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_by: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_easing: Option<ScrollEasing>,
    #[serde(skip_serializing_if = "is_false")]
    pub scroll_back: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub scroll_complete: bool,
}

impl VideoOptions {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// JSON envelope returned for `response_type: json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoResult {
    pub success: bool,
    /// Base64-encoded recording; see [`VideoResult::decode_data`].
    pub data: String,
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub file_size: u64,
    /// Recorded length in seconds.
    pub duration: u32,
    /// Server-side render time in milliseconds.
    pub took: u64,
}

impl VideoResult {
    /// Decode the base64 `data` payload into raw video bytes.
    pub fn decode_data(&self) -> crate::Result<Vec<u8>> {
        Ok(base64::engine::general_purpose::STANDARD.decode(&self.data)?)
    }
}
