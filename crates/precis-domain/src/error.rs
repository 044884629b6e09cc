//! The closed error taxonomy for the summarization pipeline

use thiserror::Error;

/// Generic message used when an upstream failure carries no detail of its own
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Failed to generate summary";

/// Every failure the service can return to a caller
///
/// The enum is closed on purpose: each variant maps to exactly one HTTP
/// status and one wire message, so the mapping is testable without touching
/// the network. `Display` yields the message that goes on the wire.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    /// The `text` field is missing, not a string, or blank
    #[error("Invalid text input")]
    InvalidInput,

    /// The `text` field exceeds the character limit
    #[error("Text too long (max 50,000 characters)")]
    InputTooLarge,

    /// The API credential is not configured (operator fault, detail logged
    /// server-side only)
    #[error("Server configuration error")]
    Configuration,

    /// The model replied, but no text could be extracted from the response
    #[error("No summary generated")]
    NoSummaryProduced,

    /// The external service call failed (network, quota, bad status, ...)
    #[error("{0}")]
    Upstream(String),
}

impl SummarizeError {
    /// Build an [`SummarizeError::Upstream`] from an underlying failure,
    /// falling back to a generic message when the failure has none
    pub fn upstream(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            SummarizeError::Upstream(UPSTREAM_FALLBACK_MESSAGE.to_string())
        } else {
            SummarizeError::Upstream(message)
        }
    }

    /// The HTTP status this error maps to
    ///
    /// Returned as a bare number so this crate stays independent of any
    /// particular HTTP framework's status type.
    pub fn status(&self) -> u16 {
        match self {
            SummarizeError::InvalidInput | SummarizeError::InputTooLarge => 400,
            SummarizeError::Configuration
            | SummarizeError::NoSummaryProduced
            | SummarizeError::Upstream(_) => 500,
        }
    }

    /// Whether this is the caller's fault (a 4xx) rather than ours
    pub fn is_client_error(&self) -> bool {
        self.status() < 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(SummarizeError::InvalidInput.status(), 400);
        assert_eq!(SummarizeError::InputTooLarge.status(), 400);
        assert!(SummarizeError::InvalidInput.is_client_error());
    }

    #[test]
    fn test_server_errors_map_to_500() {
        assert_eq!(SummarizeError::Configuration.status(), 500);
        assert_eq!(SummarizeError::NoSummaryProduced.status(), 500);
        assert_eq!(SummarizeError::Upstream("boom".to_string()).status(), 500);
        assert!(!SummarizeError::Configuration.is_client_error());
    }

    #[test]
    fn test_wire_messages_are_exact() {
        assert_eq!(SummarizeError::InvalidInput.to_string(), "Invalid text input");
        assert_eq!(
            SummarizeError::InputTooLarge.to_string(),
            "Text too long (max 50,000 characters)"
        );
        assert_eq!(
            SummarizeError::Configuration.to_string(),
            "Server configuration error"
        );
        assert_eq!(
            SummarizeError::NoSummaryProduced.to_string(),
            "No summary generated"
        );
    }

    #[test]
    fn test_upstream_keeps_underlying_message() {
        let err = SummarizeError::upstream("ECONNRESET");
        assert_eq!(err.to_string(), "ECONNRESET");
    }

    #[test]
    fn test_upstream_falls_back_when_message_is_empty() {
        let err = SummarizeError::upstream("");
        assert_eq!(err.to_string(), UPSTREAM_FALLBACK_MESSAGE);
    }
}
