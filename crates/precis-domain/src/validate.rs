//! Request payload validation
//!
//! Runs before any external call. The checks operate on the untyped request
//! body so the rejection messages stay stable regardless of how the body
//! was malformed.

use crate::error::SummarizeError;
use serde_json::Value;

/// Maximum accepted input length, in characters
pub const MAX_TEXT_CHARS: usize = 50_000;

/// Validate the decoded request body and return the text to summarize
///
/// Checks, in order:
///
/// 1. a `text` field must exist and be a JSON string, and must not be empty
///    or whitespace-only — the UI filters blank input before submitting,
///    but the server cannot trust the caller
/// 2. the string must not exceed [`MAX_TEXT_CHARS`] characters
///
/// On success the original string is returned verbatim: no trimming, no
/// normalization. Downstream prompt construction consumes it as-is.
pub fn validate_text(body: &Value) -> Result<&str, SummarizeError> {
    let text = match body.get("text") {
        Some(Value::String(s)) => s.as_str(),
        _ => return Err(SummarizeError::InvalidInput),
    };

    if text.trim().is_empty() {
        return Err(SummarizeError::InvalidInput);
    }

    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(SummarizeError::InputTooLarge);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_valid_text() {
        let body = json!({ "text": "The quick brown fox jumps over the lazy dog." });
        let text = validate_text(&body).unwrap();
        assert_eq!(text, "The quick brown fox jumps over the lazy dog.");
    }

    #[test]
    fn test_rejects_missing_field() {
        let body = json!({});
        assert_eq!(validate_text(&body), Err(SummarizeError::InvalidInput));
    }

    #[test]
    fn test_rejects_non_string_text() {
        for body in [
            json!({ "text": 42 }),
            json!({ "text": null }),
            json!({ "text": ["a", "b"] }),
            json!({ "text": { "nested": true } }),
        ] {
            assert_eq!(validate_text(&body), Err(SummarizeError::InvalidInput));
        }
    }

    #[test]
    fn test_rejects_empty_text() {
        let body = json!({ "text": "" });
        assert_eq!(validate_text(&body), Err(SummarizeError::InvalidInput));
    }

    #[test]
    fn test_rejects_whitespace_only_text() {
        let body = json!({ "text": " \n\t  " });
        assert_eq!(validate_text(&body), Err(SummarizeError::InvalidInput));
    }

    #[test]
    fn test_accepts_text_at_the_limit() {
        let body = json!({ "text": "a".repeat(MAX_TEXT_CHARS) });
        assert!(validate_text(&body).is_ok());
    }

    #[test]
    fn test_rejects_text_over_the_limit() {
        let body = json!({ "text": "a".repeat(MAX_TEXT_CHARS + 1) });
        assert_eq!(validate_text(&body), Err(SummarizeError::InputTooLarge));
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // 50,000 three-byte characters: well past the limit in bytes,
        // exactly at it in characters.
        let body = json!({ "text": "語".repeat(MAX_TEXT_CHARS) });
        assert!(validate_text(&body).is_ok());
    }

    #[test]
    fn test_returns_text_unmodified() {
        let body = json!({ "text": "  padded  \n" });
        assert_eq!(validate_text(&body).unwrap(), "  padded  \n");
    }
}
