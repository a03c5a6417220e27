//! Batch screenshot options and job records.

use super::is_false;
use crate::jobs::{JobState, JobStatus};
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Options for `POST /v1/screenshot/batch`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOptions {
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub full_page: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub dark_mode: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub block_ads: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub block_cookie_banners: bool,
    /// Webhook called by the service when the job reaches a terminal state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl BatchOptions {
    pub fn urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

/// Acknowledgement for a batch submission; `job_id` identifies the job.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchResult {
    pub success: bool,
    pub job_id: String,
    pub status: String,
    pub total: u32,
    pub completed: u32,
    pub failed: u32,
}

/// One URL's outcome within a batch.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchItemResult {
    pub url: String,
    pub status: String,
    /// Base64-encoded capture for completed items.
    pub data: Option<String>,
    pub error: Option<String>,
    pub duration: Option<u64>,
}

impl BatchItemResult {
    /// Decode the base64 `data` payload, when present.
    pub fn decode_data(&self) -> crate::Result<Option<Vec<u8>>> {
        match &self.data {
            Some(data) => Ok(Some(
                base64::engine::general_purpose::STANDARD.decode(data)?,
            )),
            None => Ok(None),
        }
    }
}

/// Status of a batch job, re-fetched from the service on every poll.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchStatus {
    pub success: bool,
    pub job_id: String,
    pub status: String,
    pub total: u32,
    pub completed: u32,
    pub failed: u32,
    pub results: Vec<BatchItemResult>,
    pub created_at: Option<String>,
    pub completed_at: Option<String>,
}

impl JobStatus for BatchStatus {
    fn state(&self) -> JobState {
        JobState::from_wire(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_options_serialize_urls_only_by_default() {
        let opts = BatchOptions::urls(["https://a.example", "https://b.example"]);
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"{"urls":["https://a.example","https://b.example"]}"#);
    }

    #[test]
    fn batch_status_state_follows_wire_string() {
        let mut status = BatchStatus {
            status: "processing".into(),
            ..Default::default()
        };
        assert_eq!(status.state(), JobState::Processing);
        status.status = "completed".into();
        assert_eq!(status.state(), JobState::Completed);
        assert!(status.state().is_terminal());
    }
}
