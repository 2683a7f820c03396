//! Resume assembler.
//!
//! Ties the pieces together for one document:
//! text extraction → language detection → strategy lookup → segmentation →
//! field extraction → [`ResumeRecord`].

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use resumeparser_extract::ExtractorRegistry;
use resumeparser_lang::{FixedLanguage, LanguageDetector, WhatlangDetector};
use resumeparser_shared::{AppConfig, RawDocument, Result, ResumeRecord, SectionLabel};

use crate::extractors::{contact, personal};
use crate::segmenter::SectionBlock;
use crate::strategy::{LanguageStrategy, StrategyRegistry};

/// Parses resume files into [`ResumeRecord`]s.
///
/// Holds only read-only state, so one instance can be shared behind an
/// `Arc` by concurrent callers.
pub struct ResumeParser {
    registry: Arc<StrategyRegistry>,
    extractors: ExtractorRegistry,
    detector: Box<dyn LanguageDetector>,
}

impl ResumeParser {
    /// Parser with the given registry, the default extractors, and
    /// `whatlang` detection.
    pub fn new(registry: Arc<StrategyRegistry>) -> Self {
        Self {
            registry,
            extractors: ExtractorRegistry::new(),
            detector: Box::new(WhatlangDetector),
        }
    }

    /// Parser built from the app config: built-in plus configured bundles,
    /// and a fixed language when `defaults.language` is not `auto`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let registry = Arc::new(StrategyRegistry::from_config(config)?);
        let parser = Self::new(registry);

        Ok(match config.defaults.language_override() {
            Some(code) => parser.with_detector(Box::new(FixedLanguage(code))),
            None => parser,
        })
    }

    pub fn with_detector(mut self, detector: Box<dyn LanguageDetector>) -> Self {
        self.detector = detector;
        self
    }

    /// Replace the text extractors, e.g. to plug in another PDF backend.
    pub fn with_extractors(mut self, extractors: ExtractorRegistry) -> Self {
        self.extractors = extractors;
        self
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Extract text from `path` and parse it.
    ///
    /// Unsupported extensions are rejected before the file is touched.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn parse_file(&self, path: &Path) -> Result<ResumeRecord> {
        let document = self.extractors.extract(path)?;
        debug!(format = %document.format(), chars = document.text().len(), "text extracted");
        Ok(self.parse_document(&document))
    }

    /// Parse already extracted text.
    #[instrument(skip_all, fields(format = %document.format()))]
    pub fn parse_document(&self, document: &RawDocument) -> ResumeRecord {
        let code = self.detector.detect(document.text());
        let strategy = self.registry.resolve(&code);
        debug!(
            %code,
            detector = self.detector.name(),
            strategy = strategy.name(),
            "strategy resolved"
        );
        assemble(document.text(), strategy)
    }
}

/// Build a record from `text` with one resolved strategy.
///
/// The text is segmented once; every extractor reads either the full text
/// or its own block. Personal fields without a rule keep their defaults.
pub fn assemble(text: &str, strategy: &dyn LanguageStrategy) -> ResumeRecord {
    let sections = strategy.segment(text);
    let block = |label| {
        sections
            .get(label)
            .cloned()
            .unwrap_or_else(|| SectionBlock::missing(label))
    };

    let record = ResumeRecord {
        personal: personal::build(strategy.extract_name(text)),
        contact: contact::extract(text),
        summary: strategy.extract_summary(text),
        education: strategy.extract_education(&block(SectionLabel::Education)),
        experience: strategy.extract_experience(&block(SectionLabel::Experience)),
    };

    info!(
        strategy = strategy.code(),
        sections = sections.found_count(),
        education = record.education.len(),
        experience = record.experience.len(),
        has_name = record.personal.full_name.is_some(),
        "resume parsed"
    );
    record
}

#[cfg(test)]
mod tests {
    use resumeparser_shared::{DocumentFormat, LanguageCode};

    use super::*;
    use crate::strategy::NoopStrategy;

    const RESUME: &str = "John Doe\njohn.doe@example.com\n555-123-4567\n\n\
        Summary: Backend engineer focused on reliable systems.\n\n\
        Education\nTech University 2015 - 2019\n\n\
        Experience\nSoftware Engineer\nAcme Corp, 2019 - Present\nBuilt services.\n";

    fn english_parser() -> ResumeParser {
        ResumeParser::new(Arc::new(StrategyRegistry::new()))
            .with_detector(Box::new(FixedLanguage(LanguageCode::new("en"))))
    }

    #[test]
    fn assembles_all_groups() {
        let record = english_parser().parse_document(&RawDocument::new(RESUME, DocumentFormat::Pdf));

        assert_eq!(record.personal.full_name.as_deref(), Some("John Doe"));
        assert_eq!(record.contact.email[0].value, "john.doe@example.com");
        assert_eq!(record.contact.phone[0].value, "555-123-4567");
        assert_eq!(
            record.summary.description,
            "Backend engineer focused on reliable systems."
        );
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].school, "Tech University");
        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.experience[0].employer, "Acme Corp");
    }

    #[test]
    fn noop_keeps_contact_only() {
        let record = assemble(RESUME, &NoopStrategy);
        assert_eq!(record.personal.full_name, None);
        assert_eq!(record.contact.email[0].value, "john.doe@example.com");
        assert_eq!(record.summary.description, "");
        assert!(record.education.is_empty());
        assert!(record.experience.is_empty());
    }

    #[test]
    fn config_language_forces_strategy() {
        let mut config = AppConfig::default();
        config.defaults.language = "xx".into();
        let parser = ResumeParser::from_config(&config).unwrap();

        let record = parser.parse_document(&RawDocument::new(RESUME, DocumentFormat::Docx));
        assert!(record.education.is_empty());
        assert_eq!(record.contact.phone[0].value, "555-123-4567");
    }

    #[test]
    fn unsupported_file_is_rejected_before_io() {
        let err = english_parser()
            .parse_file(Path::new("/nonexistent/resume.txt"))
            .unwrap_err();
        assert!(matches!(
            err,
            resumeparser_shared::ResumeParserError::UnsupportedFormat { .. }
        ));
    }
}
