// src/document/models.rs
use std::fmt;
use std::path::Path;

/// Upload formats the loader can turn into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" | "text" => Some(Self::PlainText),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::PlainText => "text",
        };
        f.write_str(name)
    }
}

/// Text pulled out of one upload, ready for the extractors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub source: String, // File name as uploaded
    pub kind: DocumentKind,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_from_extensions() {
        assert_eq!(DocumentKind::from_path(Path::new("cv.PDF")), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_path(Path::new("dir/cv.docx")), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_path(Path::new("cv.txt")), Some(DocumentKind::PlainText));
        assert_eq!(DocumentKind::from_path(Path::new("cv.doc")), None);
        assert_eq!(DocumentKind::from_path(Path::new("README")), None);
    }
}
