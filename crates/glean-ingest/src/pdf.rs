//! PDF text extraction (page-by-page)

use crate::error::IngestError;
use lopdf::Document;
use tracing::debug;

/// Extract text from a PDF byte stream.
///
/// Pages are processed in page order and their extracted text concatenated
/// with no separator inserted. A page that fails to yield text fails the
/// whole call.
pub fn extract_text(bytes: &[u8]) -> Result<String, IngestError> {
    let doc = Document::load_mem(bytes)?;

    let pages = doc.get_pages();
    debug!(pages = pages.len(), "loaded PDF");

    let mut text = String::new();
    for (page_num, _page_id) in pages {
        let page_text = doc
            .extract_text(&[page_num])
            .map_err(|e| IngestError::PdfPage {
                page: page_num,
                message: e.to_string(),
            })?;
        text.push_str(&page_text);
    }

    Ok(text)
}
