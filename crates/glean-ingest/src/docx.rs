//! DOCX whole-document text extraction

use crate::error::IngestError;
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use tracing::debug;

/// Extract text from a DOCX byte stream.
///
/// Runs are joined within a paragraph, paragraphs are joined with newlines.
/// There is no per-paragraph control — the whole document is extracted in
/// one pass.
pub fn extract_text(bytes: &[u8]) -> Result<String, IngestError> {
    let docx = read_docx(bytes).map_err(|e| IngestError::Docx(e.to_string()))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children.iter() {
        if let DocumentChild::Paragraph(para) = child {
            let para_text: String = para
                .children
                .iter()
                .filter_map(|pc| {
                    if let ParagraphChild::Run(run) = pc {
                        let run_text: String = run
                            .children
                            .iter()
                            .filter_map(|rc| {
                                if let RunChild::Text(t) = rc {
                                    Some(t.text.as_str())
                                } else {
                                    None
                                }
                            })
                            .collect();
                        Some(run_text)
                    } else {
                        None
                    }
                })
                .collect();

            if !para_text.is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    debug!(paragraphs = paragraphs.len(), "extracted DOCX paragraphs");
    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_paragraphs_joined_with_newlines() {
        let bytes = build_docx(&["first paragraph", "second paragraph"]);
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "first paragraph\nsecond paragraph");
    }

    #[test]
    fn test_empty_document() {
        let bytes = build_docx(&[]);
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_malformed_bytes_error() {
        let result = extract_text(b"not a zip archive");
        assert!(matches!(result, Err(IngestError::Docx(_))));
    }
}
