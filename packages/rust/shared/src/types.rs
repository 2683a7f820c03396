//! Core domain types: source documents, language codes, and the canonical
//! resume record schema.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ResumeParserError, Result};

// ---------------------------------------------------------------------------
// DocumentFormat
// ---------------------------------------------------------------------------

/// Container format of a source document, classified by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Classify a path by its extension (case-insensitive).
    ///
    /// Anything other than `pdf` or `docx` is rejected before any I/O happens.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match ext.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            _ => Err(ResumeParserError::unsupported_format(ext)),
        }
    }

    /// Canonical lowercase extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

// ---------------------------------------------------------------------------
// RawDocument
// ---------------------------------------------------------------------------

/// Plain text extracted from a container, plus the container's format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    text: String,
    format: DocumentFormat,
}

impl RawDocument {
    /// Build a document, normalizing `\r\n` and lone `\r` to `\n`.
    pub fn new(text: impl Into<String>, format: DocumentFormat) -> Self {
        let text: String = text.into();
        let text = if text.contains('\r') {
            text.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            text
        };
        Self { text, format }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }
}

// ---------------------------------------------------------------------------
// LanguageCode
// ---------------------------------------------------------------------------

/// ISO 639-1 language code (always stored lowercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Code returned when no language could be determined.
    pub const UNDETERMINED: &'static str = "und";

    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_lowercase())
    }

    pub fn undetermined() -> Self {
        Self(Self::UNDETERMINED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Label of a resume section recognized by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLabel {
    Education,
    Experience,
    Skills,
    Certifications,
    Achievements,
}

impl SectionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Certifications => "certifications",
            Self::Achievements => "achievements",
        }
    }
}

impl std::fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Canonical record schema
// ---------------------------------------------------------------------------

/// The canonical output of one parse call. Always carries all five groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub personal: PersonalInfo,
    pub contact: ContactInfo,
    pub summary: SummaryInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
}

impl ResumeRecord {
    /// Serialize to JSON, pretty-printed or compact.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Personal details. Only the name fields have extraction rules; the rest
/// stay at their empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub gender: String,
    pub full_name: Option<String>,
    pub birthplace: String,
    pub first_name: String,
    pub family_name: String,
    pub middle_name: String,
    pub nationality: Vec<String>,
    pub picture_url: Option<String>,
    pub date_of_birth: String,
    pub marital_status: String,
    pub picture_extension: Option<String>,
}

/// Contact group.
///
/// Lists hold only real matches: a resume with no email or phone yields
/// `[]`, never an entry with a null value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Vec<EmailEntry>,
    pub phone: Vec<PhoneEntry>,
    pub address: Vec<String>,
    pub website: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailEntry {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl PhoneEntry {
    /// The only phone type the extractor produces.
    pub const TELEPHONE: &'static str = "Telephone";

    pub fn telephone(value: impl Into<String>) -> Self {
        Self {
            kind: Self::TELEPHONE.to_string(),
            value: value.into(),
        }
    }
}

/// Summary group.
///
/// Only `description` has an extraction rule. `benefits`, `objective`,
/// `notice_period` and `current_salary` are schema placeholders that are
/// always blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryInfo {
    pub benefits: String,
    pub objective: String,
    pub description: String,
    pub notice_period: String,
    pub current_salary: String,
}

/// One education entry. Dates are opaque strings, never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub city: String,
    pub school: String,
    pub country: String,
    pub end_date: String,
    pub start_date: String,
    pub degree_name: String,
    pub description: String,
    pub country_code: String,
    pub degree_major: String,
    pub custom_sections: Vec<String>,
}

/// One experience entry. Dates are opaque strings, never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub city: String,
    pub title: String,
    pub country: String,
    pub employer: String,
    pub end_date: String,
    pub start_date: String,
    pub description: String,
    pub country_code: String,
    pub custom_sections: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("cv.PDF")).unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("/tmp/resume.Docx")).unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn format_rejects_other_extensions() {
        for path in ["notes.txt", "resume.doc", "no_extension"] {
            let err = DocumentFormat::from_path(Path::new(path)).unwrap_err();
            assert!(matches!(err, ResumeParserError::UnsupportedFormat { .. }), "{path}");
        }
    }

    #[test]
    fn raw_document_normalizes_line_endings() {
        let doc = RawDocument::new("a\r\nb\rc", DocumentFormat::Docx);
        assert_eq!(doc.text(), "a\nb\nc");
        assert_eq!(doc.format(), DocumentFormat::Docx);
    }

    #[test]
    fn language_code_is_lowercased() {
        let code: LanguageCode = " EN ".parse().unwrap();
        assert_eq!(code.as_str(), "en");
        assert_eq!(LanguageCode::undetermined().to_string(), "und");
    }

    #[test]
    fn empty_record_has_full_schema() {
        let json = serde_json::to_value(ResumeRecord::default()).expect("serialize");
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for key in ["personal", "contact", "summary", "education", "experience"] {
            assert!(obj.contains_key(key), "missing {key}");
        }

        assert_eq!(json["personal"].as_object().unwrap().len(), 11);
        assert!(json["personal"]["full_name"].is_null());
        assert!(json["personal"]["picture_url"].is_null());
        assert_eq!(json["personal"]["nationality"], serde_json::json!([]));
        assert_eq!(json["contact"]["address"], serde_json::json!([]));
        assert_eq!(json["summary"]["notice_period"], "");
        assert_eq!(json["education"], serde_json::json!([]));
        assert_eq!(json["experience"], serde_json::json!([]));
    }

    #[test]
    fn compact_json_is_single_line() {
        let record = ResumeRecord::default();
        let compact = record.to_json(false).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.starts_with(r#"{"personal":{"gender":"#));
        assert!(record.to_json(true).unwrap().contains('\n'));
    }

    #[test]
    fn phone_entry_serializes_type_key() {
        let json = serde_json::to_value(PhoneEntry::telephone("555-123-4567")).unwrap();
        assert_eq!(json["type"], "Telephone");
        assert_eq!(json["value"], "555-123-4567");
    }
}
