//! Error types for the CLI application.
//!
//! This is the single outermost error boundary: every failure from the
//! ingest, LLM, and pipeline layers converges here, gets one user-visible
//! message, and never kills an interactive session.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No API key available for this session
    #[error("No API key set. Pass --api-key, set OPENAI_API_KEY, or use the 'key' command.")]
    NoCredential,

    /// Document ingestion error
    #[error(transparent)]
    Ingest(#[from] glean_ingest::IngestError),

    /// Pipeline error (policy violation, decode failure, transport, ...)
    #[error(transparent)]
    Pipeline(#[from] glean_pipeline::PipelineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
