//! Trait definitions for external interactions
//!
//! These traits define the boundaries between pipeline logic and the hosted
//! API. Infrastructure implementations live in other crates; the pipeline is
//! generic over them, which keeps its behavior testable with in-process
//! doubles.

/// Trait for JSON-constrained chat completion
///
/// Implemented by the infrastructure layer (glean-llm).
#[allow(async_fn_in_trait)]
pub trait ChatCompletion {
    /// Error type for completion operations
    type Error: std::fmt::Display;

    /// Send a two-message prompt and return the assistant content string.
    ///
    /// Implementations must request a JSON-object response format; the
    /// returned string is expected (but not guaranteed) to parse as JSON.
    async fn complete_json(&self, system: &str, user: &str) -> Result<String, Self::Error>;
}

/// Trait for content moderation classification
///
/// Implemented by the infrastructure layer (glean-llm).
#[allow(async_fn_in_trait)]
pub trait ContentModeration {
    /// Error type for moderation operations
    type Error: std::fmt::Display;

    /// Classify `text` against the usage policy; `true` means flagged.
    async fn flagged(&self, text: &str) -> Result<bool, Self::Error>;
}
