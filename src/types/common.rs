//! Shared request building blocks: device presets, cookies, auth, proxies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device preset accepted by the capture endpoints.
///
/// Presets bundle viewport, scale factor, and touch emulation; the live list
/// is served by `GET /v1/devices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DevicePreset {
    #[serde(rename = "desktop-1080p")]
    Desktop1080p,
    #[serde(rename = "desktop-1440p")]
    Desktop1440p,
    #[serde(rename = "desktop-4k")]
    Desktop4k,
    #[serde(rename = "macbook-pro-13")]
    MacbookPro13,
    #[serde(rename = "macbook-pro-16")]
    MacbookPro16,
    #[serde(rename = "imac-24")]
    Imac24,
    #[serde(rename = "iphone-se")]
    IphoneSe,
    #[serde(rename = "iphone-12")]
    Iphone12,
    #[serde(rename = "iphone-13")]
    Iphone13,
    #[serde(rename = "iphone-14")]
    Iphone14,
    #[serde(rename = "iphone-14-pro")]
    Iphone14Pro,
    #[serde(rename = "iphone-15")]
    Iphone15,
    #[serde(rename = "iphone-15-pro")]
    Iphone15Pro,
    #[serde(rename = "iphone-15-pro-max")]
    Iphone15ProMax,
    #[serde(rename = "ipad")]
    Ipad,
    #[serde(rename = "ipad-mini")]
    IpadMini,
    #[serde(rename = "ipad-air")]
    IpadAir,
    #[serde(rename = "ipad-pro-11")]
    IpadPro11,
    #[serde(rename = "ipad-pro-12.9")]
    IpadPro129,
    #[serde(rename = "pixel-7")]
    Pixel7,
    #[serde(rename = "pixel-8")]
    Pixel8,
    #[serde(rename = "pixel-8-pro")]
    Pixel8Pro,
    #[serde(rename = "samsung-galaxy-s23")]
    SamsungGalaxyS23,
    #[serde(rename = "samsung-galaxy-s24")]
    SamsungGalaxyS24,
    #[serde(rename = "samsung-galaxy-tab-s9")]
    SamsungGalaxyTabS9,
}

impl DevicePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop1080p => "desktop-1080p",
            Self::Desktop1440p => "desktop-1440p",
            Self::Desktop4k => "desktop-4k",
            Self::MacbookPro13 => "macbook-pro-13",
            Self::MacbookPro16 => "macbook-pro-16",
            Self::Imac24 => "imac-24",
            Self::IphoneSe => "iphone-se",
            Self::Iphone12 => "iphone-12",
            Self::Iphone13 => "iphone-13",
            Self::Iphone14 => "iphone-14",
            Self::Iphone14Pro => "iphone-14-pro",
            Self::Iphone15 => "iphone-15",
            Self::Iphone15Pro => "iphone-15-pro",
            Self::Iphone15ProMax => "iphone-15-pro-max",
            Self::Ipad => "ipad",
            Self::IpadMini => "ipad-mini",
            Self::IpadAir => "ipad-air",
            Self::IpadPro11 => "ipad-pro-11",
            Self::IpadPro129 => "ipad-pro-12.9",
            Self::Pixel7 => "pixel-7",
            Self::Pixel8 => "pixel-8",
            Self::Pixel8Pro => "pixel-8-pro",
            Self::SamsungGalaxyS23 => "samsung-galaxy-s23",
            Self::SamsungGalaxyS24 => "samsung-galaxy-s24",
            Self::SamsungGalaxyTabS9 => "samsung-galaxy-tab-s9",
        }
    }
}

impl fmt::Display for DevicePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Browser cookie set before the page loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_site: Option<String>,
}

/// HTTP basic authentication for the target page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpAuth {
    pub username: String,
    pub password: String,
}

/// Proxy used for the page load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfig {
    pub server: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass: Option<Vec<String>>,
}

/// Geolocation override for the page load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geolocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}
