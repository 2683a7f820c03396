//! Error types for ResumeParser.
//!
//! Library crates use [`ResumeParserError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Only two kinds abort a parse: [`ResumeParserError::UnsupportedFormat`] and
//! [`ResumeParserError::Extraction`]. A pattern that finds nothing, or a
//! language without a registered bundle, is never an error.

use std::path::PathBuf;

/// Top-level error type for all ResumeParser operations.
#[derive(Debug, thiserror::Error)]
pub enum ResumeParserError {
    /// The document's extension is not a recognized container format.
    #[error("unsupported format: {extension:?} (only PDF and DOCX documents are supported)")]
    UnsupportedFormat { extension: String },

    /// The text extraction adapter failed to read the container.
    #[error("extraction failed for {path:?}: {message}")]
    Extraction { path: PathBuf, message: String },

    /// Configuration loading or validation error (including bad bundle patterns).
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Record serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ResumeParserError>;

impl ResumeParserError {
    /// Create an unsupported-format error for the given extension.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create an extraction error for a document path.
    pub fn extraction(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Extraction {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error aborts a parse call (as opposed to an ambient failure).
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat { .. } | Self::Extraction { .. }
        )
    }
}

impl From<serde_json::Error> for ResumeParserError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = ResumeParserError::unsupported_format("txt");
        assert!(err.to_string().contains("\"txt\""));
        assert!(err.to_string().contains("PDF and DOCX"));

        let err = ResumeParserError::config("bad heading pattern");
        assert_eq!(err.to_string(), "config error: bad heading pattern");
    }

    #[test]
    fn document_errors_are_classified() {
        assert!(ResumeParserError::unsupported_format("odt").is_document_error());
        assert!(ResumeParserError::extraction("cv.pdf", "corrupt xref").is_document_error());
        assert!(!ResumeParserError::config("x").is_document_error());
    }
}
