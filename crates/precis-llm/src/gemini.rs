//! Gemini Provider Implementation
//!
//! Integration with Google's Gemini `generateContent` REST API. One prompt
//! in, one block of text out; generation parameters are process-wide
//! constants, not per-request state.
//!
//! # Examples
//!
//! ```no_run
//! use precis_llm::GeminiClient;
//!
//! let client = GeminiClient::new("api-key-from-config");
//!
//! // generate() is async; call it from an async context via the
//! // TextGenerator trait.
//! ```

use async_trait::async_trait;
use precis_domain::{SummarizeError, TextGenerator};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Gemini API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for summarization
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default timeout for generation requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Output token ceiling for a five-bullet summary
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

/// Low temperature biases toward extraction-style output
pub const TEMPERATURE: f64 = 0.2;

/// Gemini API client
///
/// Holds the resolved credential and a reqwest client with a bounded
/// timeout, so a hung upstream surfaces as an upstream failure rather than
/// an unbounded wait. There is no retry logic: every request maps to at
/// most one upstream invocation.
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Fixed generation parameters
#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f64,
}

/// Response from the generateContent API
///
/// Every level of nesting is optional on the wire; the fields here mirror
/// that so extraction never has to guess.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Pull the first candidate's text out of the nested response shape
///
/// Total over every degenerate shape the API can produce: a missing link
/// anywhere yields `None`. An empty string counts as no text.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text
        .filter(|text| !text.is_empty())
}

impl GeminiClient {
    /// Create a new client with the default timeout
    ///
    /// # Parameters
    ///
    /// - `api_key`: credential resolved from server configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_timeout(api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new client with an explicit request timeout
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Override the API base URL (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, SummarizeError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
                temperature: TEMPERATURE,
            },
        };

        debug!("Calling Gemini model '{}', prompt length {}", self.model, prompt.len());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizeError::upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummarizeError::upstream(format!("HTTP {}: {}", status, body)));
        }

        let content: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| SummarizeError::upstream(format!("Failed to parse response: {}", e)))?;

        extract_text(content).ok_or(SummarizeError::NoSummaryProduced)
    }
}
