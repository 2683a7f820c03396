//! Strategy compiled from a [`LanguageBundle`].

use regex::Regex;
use tracing::debug;

use resumeparser_shared::{
    EducationEntry, ExperienceEntry, LanguageBundle, LanguageCode, ResumeParserError, Result,
    SummaryInfo,
};

use super::LanguageStrategy;
use crate::extractors::personal::NameMatch;
use crate::extractors::{EntryRules, education, experience, personal, summary};
use crate::patterns;
use crate::segmenter::{self, HeadingSet, SectionBlock, Sections};

/// A language strategy driven entirely by a bundle's patterns.
///
/// All patterns are compiled up front, so an invalid bundle fails here and
/// never during parsing.
pub struct PatternStrategy {
    code: String,
    name: String,
    name_pattern: Regex,
    summary_label: Option<Regex>,
    headings: HeadingSet,
    entries: EntryRules,
}

impl PatternStrategy {
    pub fn compile(bundle: &LanguageBundle) -> Result<Self> {
        let code = LanguageCode::new(&bundle.code);
        if code.as_str().is_empty() {
            return Err(ResumeParserError::config(format!(
                "language bundle {:?} has an empty code",
                bundle.name
            )));
        }

        let strategy = Self {
            code: code.as_str().to_string(),
            name: bundle.name.clone(),
            name_pattern: patterns::compile("name pattern", &bundle.name_pattern, false)?,
            summary_label: summary::label_pattern(
                &bundle.summary_labels,
                bundle.case_insensitive,
                bundle.headings_at_line_start,
            )?,
            headings: HeadingSet::compile(
                &bundle.headings,
                bundle.case_insensitive,
                bundle.headings_at_line_start,
            )?,
            entries: EntryRules::compile(bundle)?,
        };

        debug!(
            code = %strategy.code,
            headings = strategy.headings.labels().count(),
            "compiled language bundle"
        );
        Ok(strategy)
    }
}

impl LanguageStrategy for PatternStrategy {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn segment<'a>(&self, text: &'a str) -> Sections<'a> {
        segmenter::segment(text, &self.headings)
    }

    fn extract_name(&self, text: &str) -> Option<NameMatch> {
        personal::extract_name(text, &self.name_pattern)
    }

    fn extract_summary(&self, text: &str) -> SummaryInfo {
        summary::extract(text, self.summary_label.as_ref(), self.headings.any_heading())
    }

    fn extract_education(&self, block: &SectionBlock<'_>) -> Vec<EducationEntry> {
        education::extract(block, &self.entries)
    }

    fn extract_experience(&self, block: &SectionBlock<'_>) -> Vec<ExperienceEntry> {
        experience::extract(block, &self.entries)
    }
}

#[cfg(test)]
mod tests {
    use resumeparser_shared::SectionLabel;

    use super::*;
    use crate::strategy::{english_bundle, german_bundle};

    #[test]
    fn english_end_to_end_on_text() {
        let strategy = PatternStrategy::compile(&english_bundle()).unwrap();
        let text = "Jane Roe\nSummary: Platform engineer\n\nEducation\nTech University 2015 - 2019\n\nExperience\nEngineer\nAcme\n";

        assert_eq!(strategy.extract_name(text).unwrap().full_name, "Jane Roe");
        assert_eq!(strategy.extract_summary(text).description, "Platform engineer");

        let sections = strategy.segment(text);
        let education = strategy.extract_education(sections.get(SectionLabel::Education).unwrap());
        assert_eq!(education[0].school, "Tech University");

        let experience =
            strategy.extract_experience(sections.get(SectionLabel::Experience).unwrap());
        assert_eq!(experience[0].employer, "Acme");
    }

    #[test]
    fn german_bundle_has_no_degree_rule() {
        let strategy = PatternStrategy::compile(&german_bundle()).unwrap();
        let text = "Ausbildung\nTechnische Universität, Bachelor of Science 2012 - 2016\n";
        let sections = strategy.segment(text);
        let entries = strategy.extract_education(sections.get(SectionLabel::Education).unwrap());
        assert_eq!(entries[0].degree_name, "");
        assert_eq!(entries[0].start_date, "2012");
    }

    #[test]
    fn german_dates_accept_heute() {
        let strategy = PatternStrategy::compile(&german_bundle()).unwrap();
        let text = "Berufserfahrung\nEntwicklerin\nBeispiel GmbH\n2018 - heute\n";
        let sections = strategy.segment(text);
        let entries = strategy.extract_experience(sections.get(SectionLabel::Experience).unwrap());
        assert_eq!(entries[0].title, "Entwicklerin");
        assert_eq!(entries[0].employer, "Beispiel GmbH");
        assert_eq!(entries[0].end_date, "heute");
    }

    #[test]
    fn empty_code_is_rejected() {
        let mut bundle = english_bundle();
        bundle.code = "  ".into();
        let err = PatternStrategy::compile(&bundle).err().expect("must fail");
        assert!(matches!(err, ResumeParserError::Config { .. }));
    }

    #[test]
    fn code_is_normalized() {
        let mut bundle = english_bundle();
        bundle.code = " EN ".into();
        let strategy = PatternStrategy::compile(&bundle).unwrap();
        assert_eq!(strategy.code(), "en");
    }
}
