//! Built-in language bundles.

use resumeparser_shared::config::{
    default_date_range_pattern, default_entry_delimiter, default_name_pattern,
};
use resumeparser_shared::{HeadingConfig, LanguageBundle, SectionLabel};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// The fully specified English bundle.
pub fn english_bundle() -> LanguageBundle {
    LanguageBundle {
        code: "en".into(),
        name: "English".into(),
        case_insensitive: true,
        headings_at_line_start: true,
        name_pattern: default_name_pattern(),
        summary_labels: words(&["Professional Summary", "Summary", "Objective", "Profile"]),
        headings: vec![
            HeadingConfig::new(SectionLabel::Education, &["Education", "Academic Background"]),
            HeadingConfig::new(
                SectionLabel::Experience,
                &[
                    "Work Experience",
                    "Professional Experience",
                    "Employment History",
                    "Experience",
                ],
            ),
            HeadingConfig::new(SectionLabel::Skills, &["Technical Skills", "Skills"]),
            HeadingConfig::new(SectionLabel::Certifications, &["Certifications"]),
            HeadingConfig::new(SectionLabel::Achievements, &["Achievements"]),
        ],
        entry_delimiter: default_entry_delimiter(),
        degree_pattern: Some(
            r"\b(Bachelor|Master|Ph\.D\.|Doctorate) of ([A-Za-z][A-Za-z.&]*(?:[ \t]+[A-Za-z][A-Za-z.&]*)*)"
                .into(),
        ),
        date_range_pattern: default_date_range_pattern(),
        employer_labels: words(&["Employer", "Company", "Organization"]),
        description_labels: words(&["Responsibilities", "Description"]),
    }
}

/// Partial German bundle: headings, labels and dates, but no degree rule.
pub fn german_bundle() -> LanguageBundle {
    LanguageBundle {
        code: "de".into(),
        name: "German".into(),
        case_insensitive: true,
        headings_at_line_start: true,
        name_pattern: default_name_pattern(),
        summary_labels: words(&["Zusammenfassung", "Kurzprofil", "Profil"]),
        headings: vec![
            HeadingConfig::new(SectionLabel::Education, &["Ausbildung", "Bildungsweg"]),
            HeadingConfig::new(
                SectionLabel::Experience,
                &["Berufserfahrung", "Berufliche Erfahrung"],
            ),
            HeadingConfig::new(SectionLabel::Skills, &["Kenntnisse", "Fähigkeiten"]),
            HeadingConfig::new(
                SectionLabel::Certifications,
                &["Zertifizierungen", "Zertifikate"],
            ),
            HeadingConfig::new(SectionLabel::Achievements, &["Erfolge"]),
        ],
        entry_delimiter: default_entry_delimiter(),
        degree_pattern: None,
        date_range_pattern: r"\b(\d{4})[ \t]*[-–][ \t]*(\d{4}|[Hh]eute)\b".into(),
        employer_labels: words(&["Arbeitgeber", "Unternehmen", "Firma"]),
        description_labels: words(&["Aufgaben", "Beschreibung"]),
    }
}
