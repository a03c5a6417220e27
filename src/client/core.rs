use crate::client::builder::SnapClientBuilder;
use crate::response;
use crate::transport::HttpTransport;
use crate::types::meta::{CapabilitiesResult, DevicesResult, PingResult, Usage};
use crate::Result;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Client for the SnapAPI page-rendering service.
///
/// Cheap to clone; clones share the connection pool and configuration. Holds
/// no mutable per-call state, so independent calls from concurrent tasks are
/// safe.
///
/// ```rust,no_run
/// use snapapi::SnapClient;
/// use snapapi::types::ScreenshotOptions;
///
/// # async fn run() -> snapapi::Result<()> {
/// let client = SnapClient::new("sk_live_xxx")?;
/// let png = client.screenshot(&ScreenshotOptions::url("https://example.com")).await?;
/// std::fs::write("screenshot.png", &png)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SnapClient {
    pub(crate) transport: Arc<HttpTransport>,
}

impl SnapClient {
    /// Create a client with the default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        SnapClientBuilder::new().api_key(api_key).build()
    }

    /// Start building a client with custom configuration.
    pub fn builder() -> SnapClientBuilder {
        SnapClientBuilder::new()
    }

    /// Health check. `GET /v1/ping`.
    pub async fn ping(&self) -> Result<PingResult> {
        self.get_json("/v1/ping").await
    }

    /// Account usage statistics. `GET /v1/usage`.
    pub async fn usage(&self) -> Result<Usage> {
        self.get_json("/v1/usage").await
    }

    /// Available device presets. `GET /v1/devices`.
    pub async fn devices(&self) -> Result<DevicesResult> {
        self.get_json("/v1/devices").await
    }

    /// Service capabilities and features. `GET /v1/capabilities`.
    pub async fn capabilities(&self) -> Result<CapabilitiesResult> {
        self.get_json("/v1/capabilities").await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.transport.send("GET", path, None::<&()>).await?;
        response::parse_json(&body)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.transport.send("POST", path, Some(body)).await?;
        response::parse_json(&bytes)
    }

    pub(crate) async fn post_bytes<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Bytes> {
        self.transport.send("POST", path, Some(body)).await
    }
}
