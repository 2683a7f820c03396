//! PDF adapter backed by `pdf-extract`.

use std::path::Path;

use resumeparser_shared::{DocumentFormat, ResumeParserError, Result};

use super::TextExtractor;

/// Extracts text page by page from a PDF.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn extract_text(&self, path: &Path) -> Result<String> {
        pdf_extract::extract_text(path)
            .map_err(|e| ResumeParserError::extraction(path, format!("pdf: {e}")))
    }

    fn name(&self) -> &str {
        "pdf"
    }
}
