//! Glean Domain Layer
//!
//! Core types and trait seams for the Glean extraction pipeline. This crate
//! carries no infrastructure: HTTP clients, file parsers, and the host all
//! live in other crates and depend on the definitions here.
//!
//! ## Key Concepts
//!
//! - **Credential**: the per-session API secret, redacted in Debug output and
//!   never persisted
//! - **ExtractionResult**: the `{schema, summary}` pair produced by the
//!   completion endpoint
//! - **SessionState**: caller-owned record of the credential and the most
//!   recent result — the pipeline mutates it, the host owns it
//! - **Trait seams**: `ChatCompletion` and `ContentModeration`, implemented
//!   by the infrastructure layer

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod credential;
pub mod result;
pub mod session;
pub mod traits;

// Re-exports for convenience
pub use credential::Credential;
pub use result::ExtractionResult;
pub use session::SessionState;
pub use traits::{ChatCompletion, ContentModeration};
