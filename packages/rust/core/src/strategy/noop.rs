//! Fallback strategy for languages without a registered bundle.

use resumeparser_shared::{EducationEntry, ExperienceEntry, SummaryInfo};

use super::LanguageStrategy;
use crate::extractors::personal::NameMatch;
use crate::segmenter::{SectionBlock, Sections};

/// Yields empty results from every language-dependent capability.
///
/// Email and phone extraction do not go through a strategy, so they keep
/// working when this fallback is selected.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStrategy;

impl NoopStrategy {
    pub const CODE: &'static str = "und";
}

impl LanguageStrategy for NoopStrategy {
    fn code(&self) -> &str {
        Self::CODE
    }

    fn name(&self) -> &str {
        "no-op"
    }

    fn segment<'a>(&self, _text: &'a str) -> Sections<'a> {
        Sections::default()
    }

    fn extract_name(&self, _text: &str) -> Option<NameMatch> {
        None
    }

    fn extract_summary(&self, _text: &str) -> SummaryInfo {
        SummaryInfo::default()
    }

    fn extract_education(&self, _block: &SectionBlock<'_>) -> Vec<EducationEntry> {
        Vec::new()
    }

    fn extract_experience(&self, _block: &SectionBlock<'_>) -> Vec<ExperienceEntry> {
        Vec::new()
    }
}
