//! Error types for the pipeline

use thiserror::Error;

/// Errors that can occur during one processing cycle
///
/// `PolicyViolation`, `Decode`, and `MissingField` are the user-meaningful
/// outcomes; everything else is surfaced generically by the host. None of
/// them touch the session cache.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Moderation flagged the input; the cycle halts without an API call
    #[error("The input text violates our content policy. Please revise and try again.")]
    PolicyViolation,

    /// Completion content was not valid JSON
    #[error("Error processing JSON: {0}")]
    Decode(String),

    /// Completion JSON lacked a required top-level key (or it had the wrong
    /// type)
    #[error("Completion response missing '{0}' field")]
    MissingField(&'static str),

    /// No credential in the session — required before any API call
    #[error("No API credential set for this session")]
    MissingCredential,

    /// Input exceeds the configured completion-call guard
    #[error("Input too long: {0} chars (max: {1})")]
    InputTooLong(usize, usize),

    /// Moderation endpoint failure
    #[error("Moderation error: {0}")]
    Moderation(String),

    /// Completion endpoint failure
    #[error("Completion error: {0}")]
    Completion(String),
}

impl PipelineError {
    /// Whether this error is the recoverable policy notice (as opposed to a
    /// transport or decode failure).
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, PipelineError::PolicyViolation)
    }
}
