//! Field extractors.
//!
//! Each extractor is a plain function over the full text or one section
//! block. Extractors never see each other's output and never fail: a rule
//! that finds nothing leaves its field at the empty default.

pub mod contact;
pub mod education;
pub mod experience;
pub mod personal;
pub mod summary;

use regex::Regex;

use resumeparser_shared::{LanguageBundle, ResumeParserError, Result};

use crate::patterns;

/// Compiled rules for splitting a section block into entries and reading
/// fields out of each entry.
#[derive(Debug, Clone)]
pub struct EntryRules {
    /// Boundary between two entries.
    pub delimiter: Regex,
    /// Degree pattern; group 1 is the level, group 2 (optional) the major.
    pub degree: Option<Regex>,
    /// Year range; group 1 is the start, group 2 the end.
    pub date_range: Regex,
    /// `Employer:`-style line label.
    pub employer_label: Option<Regex>,
    /// `Responsibilities:`-style label stripped from descriptions.
    pub description_label: Option<Regex>,
}

impl EntryRules {
    /// Compile the entry rules of a bundle.
    ///
    /// The date pattern must capture start and end; the degree pattern must
    /// capture at least the level. Structural patterns (delimiter, degree,
    /// dates) are case-sensitive as written; label lists follow the bundle's
    /// case flag.
    pub fn compile(bundle: &LanguageBundle) -> Result<Self> {
        let delimiter = patterns::compile("entry delimiter", &bundle.entry_delimiter, false)?;

        let date_range = patterns::compile("date range pattern", &bundle.date_range_pattern, false)?;
        require_groups("date range pattern", &date_range, 2)?;

        let degree = bundle
            .degree_pattern
            .as_deref()
            .map(|p| patterns::compile("degree pattern", p, false))
            .transpose()?;
        if let Some(degree) = &degree {
            require_groups("degree pattern", degree, 1)?;
        }

        let ci = bundle.case_insensitive;
        Ok(Self {
            delimiter,
            degree,
            date_range,
            employer_label: patterns::compile_line_label("employer label", &bundle.employer_labels, ci)?,
            description_label: patterns::compile_line_label(
                "description label",
                &bundle.description_labels,
                ci,
            )?,
        })
    }
}

fn require_groups(what: &str, re: &Regex, groups: usize) -> Result<()> {
    // captures_len counts the implicit whole-match group
    if re.captures_len() <= groups {
        return Err(ResumeParserError::config(format!(
            "{what} needs {groups} capture group(s): {}",
            re.as_str()
        )));
    }
    Ok(())
}

/// Split a block into trimmed, non-blank entries.
pub(crate) fn split_entries<'t>(block: &'t str, delimiter: &Regex) -> Vec<&'t str> {
    delimiter
        .split(block)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Trimmed, non-blank lines of one entry.
pub(crate) fn entry_lines(entry: &str) -> Vec<&str> {
    entry
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// First year range in `text` as `(start, end)`.
pub(crate) fn date_range(text: &str, pattern: &Regex) -> Option<(String, String)> {
    let caps = pattern.captures(text)?;
    let group = |i| caps.get(i).map_or("", |m| m.as_str()).to_string();
    Some((group(1), group(2)))
}
