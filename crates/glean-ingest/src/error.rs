//! Error types for document ingestion

use thiserror::Error;

/// Errors that can occur while extracting text from a document
#[derive(Error, Debug)]
pub enum IngestError {
    /// Content type is neither PDF nor DOCX
    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),

    /// PDF could not be decoded
    #[error("PDF parse error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// A page failed to yield text (fatal to the whole call)
    #[error("PDF page {page}: {message}")]
    PdfPage {
        /// 1-based page number that failed
        page: u32,
        /// Underlying extraction failure
        message: String,
    },

    /// DOCX could not be decoded
    #[error("DOCX parse error: {0}")]
    Docx(String),
}
