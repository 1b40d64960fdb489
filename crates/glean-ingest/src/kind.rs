//! Declared document content types

use std::path::Path;

/// MIME type for PDF uploads
pub const MIME_PDF: &str = "application/pdf";

/// MIME type for DOCX uploads
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The two supported upload types.
///
/// Callers dispatch by declared content type before extraction; anything
/// else is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Paged PDF document
    Pdf,
    /// Office Open XML word-processing document
    Docx,
}

impl DocumentKind {
    /// Resolve a declared MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            MIME_PDF => Some(Self::Pdf),
            MIME_DOCX => Some(Self::Docx),
            _ => None,
        }
    }

    /// Resolve from a file extension (`.pdf` / `.docx`, case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// The canonical MIME type for this kind.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Pdf => MIME_PDF,
            Self::Docx => MIME_DOCX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_mime() {
        assert_eq!(DocumentKind::from_mime(MIME_PDF), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_mime(MIME_DOCX), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_mime("text/plain"), None);
    }

    #[test]
    fn test_from_path_case_insensitive() {
        assert_eq!(
            DocumentKind::from_path(&PathBuf::from("report.PDF")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_path(&PathBuf::from("notes.docx")),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_from_path_rejects_other_extensions() {
        assert_eq!(DocumentKind::from_path(&PathBuf::from("data.txt")), None);
        assert_eq!(DocumentKind::from_path(&PathBuf::from("no_extension")), None);
    }

    #[test]
    fn test_mime_round_trip() {
        for kind in [DocumentKind::Pdf, DocumentKind::Docx] {
            assert_eq!(DocumentKind::from_mime(kind.mime()), Some(kind));
        }
    }
}
