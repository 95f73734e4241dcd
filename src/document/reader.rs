// src/document/reader.rs
use std::io::{Cursor, Read};
use std::path::Path;

use crate::document::models::{DocumentKind, LoadedDocument};
use crate::utils::error::LoadError;

/// Uploads above this size are rejected unless configured otherwise.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Validates an upload and extracts its text.
/// PDF decoding runs on the blocking pool; a panic inside the decoder
/// surfaces as `LoadError::Task` instead of taking the process down.
pub async fn load_document(path: &Path, max_bytes: u64) -> Result<LoadedDocument, LoadError> {
    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let kind = DocumentKind::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(source.clone()))?;

    let size = tokio::fs::metadata(path).await?.len();
    if size > max_bytes {
        tracing::warn!("Rejecting {} ({} bytes > {} byte limit)", source, size, max_bytes);
        return Err(LoadError::TooLarge { path: source, size, limit: max_bytes });
    }

    tracing::info!("Loading {} document: {} ({} bytes)", kind, path.display(), size);
    let bytes = tokio::fs::read(path).await?;

    let raw = match kind {
        DocumentKind::Pdf => tokio::task::spawn_blocking(move || pdf_text(&bytes))
            .await
            .map_err(|e| LoadError::Task(e.to_string()))??,
        DocumentKind::Docx => docx_text(&bytes)?,
        DocumentKind::PlainText => String::from_utf8_lossy(&bytes).into_owned(),
    };

    let text = clean_text(&raw);
    if text.trim().is_empty() {
        return Err(LoadError::NoText(source));
    }

    tracing::debug!("Extracted {} characters from {}", text.chars().count(), source);
    Ok(LoadedDocument { source, kind, text })
}

fn pdf_text(bytes: &[u8]) -> Result<String, LoadError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| LoadError::Pdf(e.to_string()))
}

/// Paragraph text of `word/document.xml`, one paragraph per line.
pub fn docx_text(bytes: &[u8]) -> Result<String, LoadError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| LoadError::Docx(format!("not a DOCX archive: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| LoadError::Docx(format!("missing word/document.xml: {}", e)))?
        .read_to_string(&mut xml)?;

    let document = roxmltree::Document::parse(&xml)
        .map_err(|e| LoadError::Docx(format!("invalid document.xml: {}", e)))?;

    // Paragraphs nested in text boxes are rendered as part of their outer paragraph
    let paragraphs: Vec<String> = document
        .descendants()
        .filter(|node| {
            is_wordml(node, "p") && !node.ancestors().skip(1).any(|a| is_wordml(&a, "p"))
        })
        .map(paragraph_text)
        .collect();

    Ok(paragraphs.join("\n"))
}

fn is_wordml(node: &roxmltree::Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(WORDML_NS)
}

fn paragraph_text(paragraph: roxmltree::Node) -> String {
    let mut text = String::new();
    for node in paragraph.descendants() {
        if is_wordml(&node, "t") {
            text.push_str(node.text().unwrap_or_default());
        } else if is_wordml(&node, "tab") {
            text.push('\t');
        } else if is_wordml(&node, "br") || is_wordml(&node, "cr") {
            text.push('\n');
        }
    }
    text
}

/// Normalizes line endings and drops control characters PDF text often carries.
fn clean_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .chars()
        .map(|c| if c == '\r' || c == '\u{c}' { '\n' } else { c })
        .filter(|c| *c == '\n' || *c == '\t' || !c.is_control())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            let options = zip::write::SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored);
            writer.start_file("word/document.xml", options).unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf.into_inner()
    }

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane</w:t></w:r><w:r><w:t xml:space="preserve"> Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t>Skills:</w:t><w:tab/><w:t>Rust</w:t></w:r></w:p>
    <w:p><w:r><w:t>Line one</w:t><w:br/><w:t>Line two</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn docx_paragraphs_become_lines() {
        let text = docx_text(&docx_bytes(DOCUMENT_XML)).unwrap();
        assert_eq!(text, "Jane Doe\nSkills:\tRust\nLine one\nLine two");
    }

    #[test]
    fn docx_errors() {
        assert!(matches!(docx_text(b"not a zip"), Err(LoadError::Docx(_))));
        assert!(matches!(docx_text(&docx_bytes("<w:document")), Err(LoadError::Docx(_))));
    }

    #[test]
    fn clean_text_normalizes_line_breaks() {
        assert_eq!(clean_text("a\r\nb\rc\u{c}d\u{0}e\tf"), "a\nb\nc\nde\tf");
    }

    #[test]
    fn loads_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "John Smith\r\njohn@example.com\r\n").unwrap();

        let doc = tokio_test::block_on(load_document(&path, DEFAULT_MAX_FILE_SIZE)).unwrap();
        assert_eq!(doc.source, "resume.txt");
        assert_eq!(doc.kind, DocumentKind::PlainText);
        assert_eq!(doc.text, "John Smith\njohn@example.com\n");
    }

    #[test]
    fn loads_docx_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, docx_bytes(DOCUMENT_XML)).unwrap();

        let doc = tokio_test::block_on(load_document(&path, DEFAULT_MAX_FILE_SIZE)).unwrap();
        assert_eq!(doc.kind, DocumentKind::Docx);
        assert!(doc.text.starts_with("Jane Doe"));
    }

    #[test]
    fn rejects_invalid_uploads() {
        let dir = tempfile::tempdir().unwrap();

        let legacy = dir.path().join("resume.doc");
        std::fs::write(&legacy, "binary").unwrap();
        let err = tokio_test::block_on(load_document(&legacy, DEFAULT_MAX_FILE_SIZE)).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(name) if name == "resume.doc"));

        let big = dir.path().join("big.txt");
        std::fs::write(&big, "x".repeat(64)).unwrap();
        let err = tokio_test::block_on(load_document(&big, 16)).unwrap_err();
        assert!(matches!(err, LoadError::TooLarge { size: 64, limit: 16, .. }));

        let blank = dir.path().join("blank.txt");
        std::fs::write(&blank, " \n\n ").unwrap();
        let err = tokio_test::block_on(load_document(&blank, DEFAULT_MAX_FILE_SIZE)).unwrap_err();
        assert!(matches!(err, LoadError::NoText(_)));

        let missing = dir.path().join("missing.pdf");
        let err = tokio_test::block_on(load_document(&missing, DEFAULT_MAX_FILE_SIZE)).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn corrupt_pdf_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"%PDF-1.4\nthis is not really a pdf").unwrap();

        let err = tokio_test::block_on(load_document(&path, DEFAULT_MAX_FILE_SIZE)).unwrap_err();
        assert!(matches!(err, LoadError::Pdf(_) | LoadError::Task(_) | LoadError::NoText(_)));
    }
}
