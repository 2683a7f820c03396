//! Text extraction adapters for resume containers.
//!
//! Each adapter turns one container format into plain text in document order
//! (page by page for PDF, paragraph by paragraph for DOCX). The file is read
//! once and released before the text is handed back.

mod docx;
mod pdf;

use std::path::Path;

use tracing::{debug, instrument};

use resumeparser_shared::{DocumentFormat, RawDocument, ResumeParserError, Result};

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Contract for turning a container file into plain text.
pub trait TextExtractor: Send + Sync {
    /// The container format this adapter reads.
    fn format(&self) -> DocumentFormat;

    /// Read the whole document and return its text.
    ///
    /// Any failure must be reported as [`ResumeParserError::Extraction`].
    fn extract_text(&self, path: &Path) -> Result<String>;

    /// Human-readable adapter name for tracing.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Holds one adapter per supported container format.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a registry with the built-in PDF and DOCX adapters.
    pub fn new() -> Self {
        Self {
            extractors: vec![Box::new(PdfExtractor), Box::new(DocxExtractor)],
        }
    }

    /// Register an adapter, replacing any existing one for the same format.
    pub fn with_extractor(mut self, extractor: Box<dyn TextExtractor>) -> Self {
        self.extractors.retain(|e| e.format() != extractor.format());
        self.extractors.push(extractor);
        self
    }

    /// Find the adapter for a format.
    pub fn for_format(&self, format: DocumentFormat) -> Option<&dyn TextExtractor> {
        self.extractors
            .iter()
            .find(|e| e.format() == format)
            .map(|e| e.as_ref())
    }

    /// Classify `path` and extract its text.
    ///
    /// The format check happens before the file is touched, so an unsupported
    /// extension never causes any I/O.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn extract(&self, path: &Path) -> Result<RawDocument> {
        let format = DocumentFormat::from_path(path)?;
        let extractor = self
            .for_format(format)
            .ok_or_else(|| ResumeParserError::unsupported_format(format.extension()))?;

        let text = extractor.extract_text(path)?;
        debug!(
            adapter = extractor.name(),
            chars = text.chars().count(),
            "text extracted"
        );

        Ok(RawDocument::new(text, format))
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
