//! Glean Pipeline
//!
//! Orchestrates one interaction cycle: moderation gate → completion call →
//! session-cache update.
//!
//! # Architecture
//!
//! ```text
//! Text → Moderation → ChatCompletion → parse/validate → SessionState
//! ```
//!
//! The host owns the interaction loop and a [`SessionState`]; the pipeline
//! owns no scheduling. Each [`Pipeline::process`] call is one synchronous
//! pass — no retries, no background work, and the cache is only written
//! after a fully validated result.
//!
//! # Example Usage
//!
//! ```no_run
//! use glean_domain::{Credential, SessionState};
//! use glean_llm::{MockChat, MockModeration};
//! use glean_pipeline::{Pipeline, PipelineConfig};
//!
//! # async fn example() -> Result<(), glean_pipeline::PipelineError> {
//! let chat = MockChat::new(r#"{"schema": {"k": "v"}, "summary": "short"}"#);
//! let moderation = MockModeration::allowing();
//! let pipeline = Pipeline::new(chat, moderation, PipelineConfig::default());
//!
//! let mut session = SessionState::new();
//! session.set_credential(Credential::new("sk-test"));
//!
//! let result = pipeline.process(&mut session, "Some document text").await?;
//! println!("summary: {}", result.summary);
//! # Ok(())
//! # }
//! ```
//!
//! [`SessionState`]: glean_domain::SessionState

#![warn(missing_docs)]

mod config;
mod error;
mod parser;
mod pipeline;
mod prompt;

#[cfg(test)]
mod tests;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use parser::parse_completion;
pub use pipeline::Pipeline;
pub use prompt::ExtractionPrompt;
