use crate::error::{ApiError, Error};
use crate::response;
use crate::Result;
use bytes::Bytes;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.snapapi.pics";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("snapapi-rust/", env!("CARGO_PKG_VERSION"));

/// One authenticated request per call against the service.
///
/// Holds only immutable configuration and the shared connection pool; no
/// cross-call state. Construct via [`crate::SnapClientBuilder`].
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    user_agent: String,
}

// Manual impl so the API key never ends up in logs.
impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub(crate) fn new(
        client: reqwest::Client,
        base_url: String,
        api_key: String,
        user_agent: String,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            user_agent,
        }
    }

    /// Send one request and return the raw response body.
    ///
    /// - `body` is serialized to JSON when present; serialization failure is
    ///   a local error and nothing is sent.
    /// - A transport failure before any response is received maps to
    ///   `CONNECTION_ERROR` with status 0.
    /// - Any response with status >= 400 is decoded into an [`ApiError`],
    ///   never treated as success.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: &str,
        path: &str,
        body: Option<&B>,
    ) -> Result<Bytes> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4().to_string();

        let mut req = match method {
            "POST" => self.client.post(&url),
            "PUT" => self.client.put(&url),
            "DELETE" => self.client.delete(&url),
            _ => self.client.get(&url),
        };

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(Error::Serialize)?;
            req = req.body(payload);
        }

        req = req
            .header("X-Api-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .header("User-Agent", &self.user_agent)
            .header("X-Request-Id", &request_id);

        let start = Instant::now();
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::connection(format!("connection error: {e}")))?;

        let status = resp.status().as_u16();
        let bytes = resp.bytes().await.map_err(Error::Body)?;

        if status >= 400 {
            let err = response::decode_error(status, &bytes);
            info!(
                http_status = status,
                code = err.raw_code.as_str(),
                path,
                request_id = request_id.as_str(),
                duration_ms = start.elapsed().as_millis() as u64,
                "snapapi request failed"
            );
            return Err(Error::Api(err));
        }

        debug!(
            http_status = status,
            path,
            request_id = request_id.as_str(),
            duration_ms = start.elapsed().as_millis() as u64,
            body_bytes = bytes.len(),
            "snapapi request ok"
        );
        Ok(bytes)
    }
}
