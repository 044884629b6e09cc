//! The summarization gateway.
//!
//! Sits between validated input and the LLM backend: builds the prompt,
//! invokes the generator, and returns the model's text untouched. The
//! backend is injected at startup, so every failure path is exercisable
//! with a mock in its place.

use precis_domain::{PromptBuilder, SummarizeError, TextGenerator};
use std::sync::Arc;
use tracing::error;

/// Transforms validated text into a model invocation
pub struct SummaryGateway {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl SummaryGateway {
    /// Create a gateway backed by the given generator
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Create a gateway with no backend
    ///
    /// Used when no credential could be resolved at startup: the server
    /// still runs, and every summarize request fails with a configuration
    /// error instead of crashing the process.
    pub fn unconfigured() -> Self {
        Self { generator: None }
    }

    /// Whether a backend is configured
    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Summarize validated text
    ///
    /// The credential check happens first: when unconfigured, no prompt is
    /// built and no external call is made.
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let generator = match &self.generator {
            Some(generator) => generator,
            None => {
                error!("Summarize request received but no API key is configured");
                return Err(SummarizeError::Configuration);
            }
        };

        let prompt = PromptBuilder::new(text).build();
        generator.generate(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precis_llm::MockGenerator;

    #[tokio::test]
    async fn test_summarize_passes_model_text_through() {
        let generator = MockGenerator::new("- A\n- B\n- C\n- D\n- E");
        let gateway = SummaryGateway::new(Arc::new(generator));

        let summary = gateway.summarize("some document").await.unwrap();
        assert_eq!(summary, "- A\n- B\n- C\n- D\n- E");
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_rejects_without_invoking() {
        let gateway = SummaryGateway::unconfigured();

        let result = gateway.summarize("some document").await;
        assert_eq!(result, Err(SummarizeError::Configuration));
        assert!(!gateway.is_configured());
    }

    #[tokio::test]
    async fn test_generator_errors_propagate_unchanged() {
        let generator = MockGenerator::with_error(SummarizeError::NoSummaryProduced);
        let gateway = SummaryGateway::new(Arc::new(generator));

        let result = gateway.summarize("some document").await;
        assert_eq!(result, Err(SummarizeError::NoSummaryProduced));
    }
}
