//! Section segmenter.
//!
//! Splits raw resume text into flat, non-overlapping blocks. For each
//! configured heading the first occurrence wins; the block runs from the end
//! of that heading to the start of the next recognized heading (any label) or
//! to the end of the text. A heading that never occurs yields an empty block.

use std::ops::Range;

use regex::Regex;
use tracing::{debug, instrument};

use resumeparser_shared::{HeadingConfig, Result, SectionLabel};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A contiguous span of the source text attributed to one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBlock<'a> {
    /// Section label.
    pub label: SectionLabel,
    /// Byte range of the block body in the source text, `None` when the
    /// heading was not found.
    pub span: Option<Range<usize>>,
    /// Block body (empty when the heading was not found).
    pub text: &'a str,
}

impl<'a> SectionBlock<'a> {
    /// Block for a heading that does not occur in the text.
    pub fn missing(label: SectionLabel) -> Self {
        Self {
            label,
            span: None,
            text: "",
        }
    }

    /// Whether the heading was found.
    pub fn is_found(&self) -> bool {
        self.span.is_some()
    }

    /// Whether the block has no non-whitespace content.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// All blocks for one document, in the bundle's heading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    blocks: Vec<SectionBlock<'a>>,
}

impl<'a> Sections<'a> {
    /// Block for `label`, if the bundle configures that heading.
    pub fn get(&self, label: SectionLabel) -> Option<&SectionBlock<'a>> {
        self.blocks.iter().find(|b| b.label == label)
    }

    /// Number of headings actually found.
    pub fn found_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_found()).count()
    }
}

// ---------------------------------------------------------------------------
// Heading matcher
// ---------------------------------------------------------------------------

struct Heading {
    label: SectionLabel,
    pattern: Regex,
}

/// Compiled heading patterns for one bundle.
pub struct HeadingSet {
    headings: Vec<Heading>,
    /// Matches any configured heading; used to find block ends.
    any: Option<Regex>,
}

impl HeadingSet {
    /// Compile heading aliases into patterns.
    ///
    /// Each alias matches as a whole word and swallows an optional trailing
    /// colon. With `at_line_start`, a heading must begin its line.
    pub fn compile(
        headings: &[HeadingConfig],
        case_insensitive: bool,
        at_line_start: bool,
    ) -> Result<Self> {
        let mut compiled = Vec::with_capacity(headings.len());
        let mut all_aliases = Vec::new();

        for heading in headings {
            let Some(alternation) = crate::patterns::word_alternation(&heading.aliases) else {
                continue;
            };
            let pattern = build_pattern(&alternation, case_insensitive, at_line_start)?;
            compiled.push(Heading {
                label: heading.label,
                pattern,
            });
            all_aliases.extend(heading.aliases.iter().cloned());
        }

        let any = match crate::patterns::word_alternation(&all_aliases) {
            Some(alternation) => Some(build_pattern(&alternation, case_insensitive, at_line_start)?),
            None => None,
        };

        Ok(Self {
            headings: compiled,
            any,
        })
    }

    /// Pattern matching any configured heading, if the bundle has any.
    pub fn any_heading(&self) -> Option<&Regex> {
        self.any.as_ref()
    }

    /// Configured labels, in order.
    pub fn labels(&self) -> impl Iterator<Item = SectionLabel> + '_ {
        self.headings.iter().map(|h| h.label)
    }
}

fn build_pattern(alternation: &str, case_insensitive: bool, at_line_start: bool) -> Result<Regex> {
    let anchor = if at_line_start { r"(?m)^[ \t]*" } else { "" };
    let source = format!(r"{anchor}\b(?:{alternation})\b[ \t]*:?");

    crate::patterns::compile("heading pattern", &source, case_insensitive)
}

// ---------------------------------------------------------------------------
// Segmentation
// ---------------------------------------------------------------------------

/// Carve `text` into one block per configured heading.
#[instrument(skip_all, fields(text_len = text.len()))]
pub fn segment<'a>(text: &'a str, headings: &HeadingSet) -> Sections<'a> {
    let blocks: Vec<SectionBlock<'a>> = headings
        .headings
        .iter()
        .map(|heading| match heading.pattern.find(text) {
            Some(m) => {
                let start = m.end();
                let end = headings
                    .any
                    .as_ref()
                    .and_then(|any| any.find_at(text, start))
                    .map(|next| next.start())
                    .unwrap_or(text.len());

                SectionBlock {
                    label: heading.label,
                    span: Some(start..end),
                    text: &text[start..end],
                }
            }
            None => SectionBlock::missing(heading.label),
        })
        .collect();

    let sections = Sections { blocks };
    debug!(found = sections.found_count(), "text segmented");
    sections
}
