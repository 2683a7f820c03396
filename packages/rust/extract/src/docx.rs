//! DOCX adapter backed by `docx-rs`.
//!
//! Body paragraphs are emitted in document order, one per line. Tables,
//! headers and footers are skipped.

use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use resumeparser_shared::{DocumentFormat, ResumeParserError, Result};

use super::TextExtractor;

/// Extracts paragraph text from a Word document.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn extract_text(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)
            .map_err(|e| ResumeParserError::extraction(path, format!("docx: {e}")))?;

        let docx = docx_rs::read_docx(&bytes)
            .map_err(|e| ResumeParserError::extraction(path, format!("docx: {e}")))?;

        let mut text = String::new();
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                push_paragraph_children(&paragraph.children, &mut text);
                text.push('\n');
            }
        }

        Ok(text)
    }

    fn name(&self) -> &str {
        "docx"
    }
}

/// Append the visible text of a paragraph's runs (including hyperlink runs).
fn push_paragraph_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, out),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_paragraphs_in_order() {
        use docx_rs::{Docx, Paragraph, Run};

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resume.docx");
        let file = std::fs::File::create(&path).unwrap();

        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Roe")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("jane@example.com")))
            .build()
            .pack(file)
            .expect("write docx");

        let text = DocxExtractor.extract_text(&path).unwrap();
        assert_eq!(text, "Jane Roe\njane@example.com\n");
    }

    #[test]
    fn corrupt_container_is_extraction_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, b"PK but not really a zip").unwrap();

        let err = DocxExtractor.extract_text(&path).unwrap_err();
        assert!(matches!(err, ResumeParserError::Extraction { .. }));
    }
}
