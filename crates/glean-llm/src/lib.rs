//! Glean LLM Layer
//!
//! Hosted-API implementations of the `ChatCompletion` and
//! `ContentModeration` traits from `glean-domain`.
//!
//! # Providers
//!
//! - [`OpenAiClient`]: OpenAI-compatible chat completions + moderations
//! - [`MockChat`] / [`MockModeration`]: deterministic doubles for testing
//!
//! # Examples
//!
//! ```
//! use glean_llm::MockChat;
//! use glean_domain::ChatCompletion;
//!
//! # async fn example() {
//! let chat = MockChat::new(r#"{"schema": {}, "summary": "hi"}"#);
//! let content = chat.complete_json("system", "user").await.unwrap();
//! assert!(content.contains("summary"));
//! assert_eq!(chat.call_count(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use glean_domain::{ChatCompletion, ContentModeration};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub use openai::OpenAiClient;

/// Errors that can occur talking to the hosted API
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Non-2xx API response
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body text (or a placeholder when unreadable)
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Mock chat completion for deterministic testing
///
/// Returns a pre-configured content string without any network call, and
/// counts invocations so tests can assert that the Idle path makes none.
#[derive(Debug, Clone)]
pub struct MockChat {
    response: Result<String, String>,
    calls: Arc<AtomicUsize>,
}

impl MockChat {
    /// Create a mock that always returns `content`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            response: Ok(content.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock that always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `complete_json` was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ChatCompletion for MockChat {
    type Error = LlmError;

    async fn complete_json(&self, _system: &str, _user: &str) -> Result<String, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(content) => Ok(content.clone()),
            Err(message) => Err(LlmError::Communication(message.clone())),
        }
    }
}

/// Mock moderation for deterministic testing
///
/// Returns a fixed verdict (or a fixed error) and counts invocations.
#[derive(Debug, Clone)]
pub struct MockModeration {
    verdict: Result<bool, String>,
    calls: Arc<AtomicUsize>,
}

impl MockModeration {
    /// A moderator that never flags anything.
    pub fn allowing() -> Self {
        Self {
            verdict: Ok(false),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A moderator that flags everything.
    pub fn flagging() -> Self {
        Self {
            verdict: Ok(true),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A moderator whose calls fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            verdict: Err(message.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `flagged` was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ContentModeration for MockModeration {
    type Error = LlmError;

    async fn flagged(&self, _text: &str) -> Result<bool, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.verdict {
            Ok(flagged) => Ok(*flagged),
            Err(message) => Err(LlmError::Communication(message.clone())),
        }
    }
}
