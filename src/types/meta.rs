//! Account and service metadata records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// API usage statistics from `GET /v1/usage`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Usage {
    pub used: u64,
    pub limit: u64,
    pub remaining: u64,
    pub reset_at: Option<String>,
}

/// One device preset as reported by `GET /v1/devices`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceInfo {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub device_scale_factor: f64,
    pub is_mobile: bool,
}

/// Device presets grouped by category.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DevicesResult {
    pub success: bool,
    pub devices: HashMap<String, Vec<DeviceInfo>>,
    pub total: u32,
}

/// Service capabilities from `GET /v1/capabilities`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CapabilitiesResult {
    pub success: bool,
    pub version: String,
    pub capabilities: serde_json::Map<String, serde_json::Value>,
}

/// Health check response from `GET /v1/ping`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PingResult {
    pub status: String,
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_parses_service_shape() {
        let usage: Usage = serde_json::from_str(
            r#"{"used":42,"limit":1000,"remaining":958,"resetAt":"2026-09-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(usage.used, 42);
        assert_eq!(usage.remaining, 958);
        assert_eq!(usage.reset_at.as_deref(), Some("2026-09-01T00:00:00Z"));
    }

    #[test]
    fn devices_parses_grouped_presets() {
        let body = r#"{"success":true,"devices":{"phones":[{"id":"iphone-15","name":"iPhone 15","width":393,"height":852,"deviceScaleFactor":3.0,"isMobile":true}]},"total":1}"#;
        let result: DevicesResult = serde_json::from_str(body).unwrap();
        assert!(result.success);
        assert_eq!(result.devices["phones"][0].id, "iphone-15");
        assert!(result.devices["phones"][0].is_mobile);
    }
}
