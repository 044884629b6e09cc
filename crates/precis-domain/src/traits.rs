//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::error::SummarizeError;
use async_trait::async_trait;

/// The single seam to an external text-generation service
///
/// Implemented by the infrastructure layer (`precis-llm`). The gateway only
/// ever talks to this trait, which keeps every failure path testable with a
/// mock in place of the real backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the given prompt
    ///
    /// This is the only operation in the system permitted to suspend on
    /// network I/O. Implementations map every failure into the closed
    /// [`SummarizeError`] taxonomy; nothing else escapes.
    async fn generate(&self, prompt: &str) -> Result<String, SummarizeError>;
}
