//! LLM prompt engineering for summarization

/// Builds the instruction prompt sent to the model
///
/// Construction is pure and deterministic: the same input text always
/// produces a byte-identical prompt.
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a new prompt builder for the given (already validated) text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the complete summarization prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Role, task, and format specification
        prompt.push_str(SUMMARY_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The text to summarize, verbatim
        prompt.push_str("Text:\n");
        prompt.push_str(&self.text);

        prompt
    }
}

const SUMMARY_INSTRUCTIONS: &str = r#"You are a professional document summarizer.
Please summarize the following text into exactly 5 concise bullet points.
The tone should be professional and objective.
Output format:
- Point 1
- Point 2
- Point 3
- Point 4
- Point 5"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_instructions() {
        let prompt = PromptBuilder::new("Some document").build();
        assert!(prompt.contains("professional document summarizer"));
        assert!(prompt.contains("exactly 5 concise bullet points"));
    }

    #[test]
    fn test_prompt_includes_example_layout() {
        let prompt = PromptBuilder::new("Some document").build();
        assert!(prompt.contains("- Point 1"));
        assert!(prompt.contains("- Point 5"));
    }

    #[test]
    fn test_prompt_includes_text_verbatim() {
        let text = "  Alice works at Acme Corp.\nBob does not.  ";
        let prompt = PromptBuilder::new(text).build();
        assert!(prompt.ends_with(text));
        assert!(prompt.contains("Text:\n  Alice works at Acme Corp."));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let text = "The quick brown fox jumps over the lazy dog.";
        let first = PromptBuilder::new(text).build();
        let second = PromptBuilder::new(text).build();
        assert_eq!(first, second);
    }

    #[test]
    fn test_instructions_precede_text() {
        let prompt = PromptBuilder::new("INPUT_MARKER").build();
        let instructions_at = prompt.find("- Point 5").unwrap();
        let text_at = prompt.find("INPUT_MARKER").unwrap();
        assert!(instructions_at < text_at);
    }
}
