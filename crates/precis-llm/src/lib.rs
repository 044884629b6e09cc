//! Precis LLM Provider Layer
//!
//! Implementations of the `TextGenerator` trait from `precis-domain`.
//!
//! # Providers
//!
//! - `GeminiClient`: Google Gemini `generateContent` REST API integration
//! - `MockGenerator`: Deterministic mock for testing
//!
//! # Examples
//!
//! ```
//! use precis_llm::MockGenerator;
//! use precis_domain::TextGenerator;
//!
//! let generator = MockGenerator::new("- Point 1\n- Point 2");
//! let summary = tokio_test::block_on(generator.generate("any prompt")).unwrap();
//! assert_eq!(summary, "- Point 1\n- Point 2");
//! ```

#![warn(missing_docs)]

pub mod gemini;

use async_trait::async_trait;
use precis_domain::{SummarizeError, TextGenerator};
use std::sync::{Arc, Mutex};

pub use gemini::GeminiClient;

/// Mock text generator for deterministic testing
///
/// Returns a pre-configured result without making any network calls, and
/// counts invocations so tests can assert that validation failures and
/// missing-credential paths never reach the backend.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    result: Result<String, SummarizeError>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGenerator {
    /// Create a mock that succeeds with the given text for every prompt
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            result: Ok(response.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a mock that fails with the given error for every prompt
    pub fn with_error(error: SummarizeError) -> Self {
        Self {
            result: Err(error),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Get the number of times `generate` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new("Default mock summary")
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, SummarizeError> {
        *self.call_count.lock().unwrap() += 1;
        self.result.clone()
    }
}
