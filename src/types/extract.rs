//! Content extraction and AI analysis options and results.

use serde::{Deserialize, Serialize};

/// What to extract from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractType {
    Html,
    Text,
    Markdown,
    Article,
    Links,
    Images,
    Metadata,
    Structured,
}

/// Options for `POST /v1/extract`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub url: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub extract_type: Option<ExtractType>,
}

impl ExtractOptions {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            extract_type: None,
        }
    }

    pub fn with_type(url: impl Into<String>, extract_type: ExtractType) -> Self {
        Self {
            url: url.into(),
            extract_type: Some(extract_type),
        }
    }
}

/// Result of a content extraction.
///
/// Which fields are populated depends on the extraction type; the rest stay
/// at their defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractResult {
    pub success: bool,
    #[serde(rename = "type")]
    pub extract_type: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub links: Vec<String>,
    pub images: Vec<String>,
    pub metadata: Option<serde_json::Value>,
    pub took: Option<u64>,
}

/// Options for `POST /v1/analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    pub url: String,
    pub prompt: String,
}

impl AnalyzeOptions {
    pub fn new(url: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            prompt: prompt.into(),
        }
    }
}

/// Result of an AI analysis.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeResult {
    pub success: bool,
    pub analysis: String,
    pub model: Option<String>,
    pub took: Option<u64>,
}
