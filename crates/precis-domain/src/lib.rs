//! Precis Domain Layer
//!
//! Core request-handling logic for the summarization service: input
//! validation, prompt construction, and the closed error taxonomy. This
//! crate is infrastructure-free — it knows nothing about HTTP frameworks or
//! which LLM backend sits behind the [`TextGenerator`] seam.
//!
//! ## Key Concepts
//!
//! - **Validation**: shape and size checks over the untyped request body,
//!   performed before any external call
//! - **Prompt**: the deterministic instruction string sent to the model
//! - **SummarizeError**: every failure the service can produce, each with a
//!   fixed status and wire message
//!
//! # Examples
//!
//! ```
//! use precis_domain::{validate_text, PromptBuilder};
//! use serde_json::json;
//!
//! let body = json!({ "text": "Quarterly revenue rose 12%." });
//! let text = validate_text(&body).unwrap();
//! let prompt = PromptBuilder::new(text).build();
//! assert!(prompt.contains("Quarterly revenue rose 12%."));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod prompt;
pub mod traits;
pub mod validate;

// Re-exports for convenience
pub use error::SummarizeError;
pub use prompt::PromptBuilder;
pub use traits::TextGenerator;
pub use validate::{validate_text, MAX_TEXT_CHARS};
