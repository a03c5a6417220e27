//! Content extraction and AI analysis operations.

use crate::client::core::SnapClient;
use crate::error::ApiError;
use crate::types::extract::{
    AnalyzeOptions, AnalyzeResult, ExtractOptions, ExtractResult, ExtractType,
};
use crate::Result;

impl SnapClient {
    /// Extract content from a webpage. `POST /v1/extract`.
    pub async fn extract(&self, opts: &ExtractOptions) -> Result<ExtractResult> {
        if opts.url.is_empty() {
            return Err(ApiError::invalid_params("URL is required").into());
        }
        self.post_json("/v1/extract", opts).await
    }

    /// Extract content as Markdown.
    pub async fn extract_markdown(&self, url: &str) -> Result<ExtractResult> {
        self.extract(&ExtractOptions::with_type(url, ExtractType::Markdown))
            .await
    }

    /// Extract the main article content.
    pub async fn extract_article(&self, url: &str) -> Result<ExtractResult> {
        self.extract(&ExtractOptions::with_type(url, ExtractType::Article))
            .await
    }

    /// Extract structured content.
    pub async fn extract_structured(&self, url: &str) -> Result<ExtractResult> {
        self.extract(&ExtractOptions::with_type(url, ExtractType::Structured))
            .await
    }

    /// Extract plain text content.
    pub async fn extract_text(&self, url: &str) -> Result<ExtractResult> {
        self.extract(&ExtractOptions::with_type(url, ExtractType::Text))
            .await
    }

    /// Extract all links.
    pub async fn extract_links(&self, url: &str) -> Result<ExtractResult> {
        self.extract(&ExtractOptions::with_type(url, ExtractType::Links))
            .await
    }

    /// Extract all image URLs.
    pub async fn extract_images(&self, url: &str) -> Result<ExtractResult> {
        self.extract(&ExtractOptions::with_type(url, ExtractType::Images))
            .await
    }

    /// Extract page metadata.
    pub async fn extract_metadata(&self, url: &str) -> Result<ExtractResult> {
        self.extract(&ExtractOptions::with_type(url, ExtractType::Metadata))
            .await
    }

    /// Run an AI-powered analysis of a webpage. `POST /v1/analyze`.
    pub async fn analyze(&self, opts: &AnalyzeOptions) -> Result<AnalyzeResult> {
        if opts.url.is_empty() {
            return Err(ApiError::invalid_params("URL is required").into());
        }
        if opts.prompt.is_empty() {
            return Err(ApiError::invalid_params("Prompt is required").into());
        }
        self.post_json("/v1/analyze", opts).await
    }
}
