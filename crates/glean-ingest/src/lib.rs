//! Glean Ingest
//!
//! Turns uploaded PDF and DOCX byte streams into plain text for the
//! extraction pipeline.
//!
//! # Overview
//!
//! Two independent sub-routines, selected by the file's declared content
//! type:
//!
//! - PDF: page-by-page extraction, concatenated in page order with no
//!   separator inserted
//! - DOCX: whole-document extraction, paragraphs joined with newlines
//!
//! Both paths read only the input bytes; malformed content surfaces as an
//! [`IngestError`] for the host's single error boundary.
//!
//! # Example Usage
//!
//! ```no_run
//! use glean_ingest::{extract, DocumentKind};
//!
//! # fn example(bytes: &[u8]) -> Result<(), glean_ingest::IngestError> {
//! let kind = DocumentKind::from_mime("application/pdf").unwrap();
//! let text = extract(bytes, kind)?;
//! println!("{} chars extracted", text.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod docx;
mod error;
mod kind;
mod pdf;

pub use error::IngestError;
pub use kind::DocumentKind;

use tracing::debug;

/// Extract plain text from a document's bytes, dispatching by declared kind.
pub fn extract(bytes: &[u8], kind: DocumentKind) -> Result<String, IngestError> {
    debug!(bytes = bytes.len(), ?kind, "extracting document text");
    match kind {
        DocumentKind::Pdf => pdf::extract_text(bytes),
        DocumentKind::Docx => docx::extract_text(bytes),
    }
}
