//! Summary: the text introduced by the first summary label.

use regex::Regex;

use resumeparser_shared::{Result, SummaryInfo};

use crate::patterns;

/// Compile summary labels into one pattern, or `None` when the bundle has
/// no labels.
pub fn label_pattern(
    labels: &[String],
    case_insensitive: bool,
    at_line_start: bool,
) -> Result<Option<Regex>> {
    let Some(alternation) = patterns::word_alternation(labels) else {
        return Ok(None);
    };
    let anchor = if at_line_start { r"(?m)^[ \t]*" } else { "" };
    let source = format!(r"{anchor}\b(?:{alternation})\b[ \t]*:?");
    patterns::compile("summary label pattern", &source, case_insensitive).map(Some)
}

/// Summary group for `text`.
///
/// The rest of the label's line becomes `description`. A label alone on its
/// line takes the next paragraph instead, with its lines joined by spaces.
/// Capture stops at the next section heading, so a summary never runs into
/// the block below it. `benefits`, `objective`, `notice_period` and
/// `current_salary` have no rule and are always blank.
pub fn extract(text: &str, label: Option<&Regex>, headings: Option<&Regex>) -> SummaryInfo {
    let description = label
        .and_then(|re| re.find(text))
        .map(|m| {
            let end = headings
                .and_then(|any| any.find_at(text, m.end()))
                .map_or(text.len(), |next| next.start());
            description_after(&text[m.end()..end])
        })
        .unwrap_or_default();

    SummaryInfo {
        description,
        ..SummaryInfo::default()
    }
}

fn description_after(rest: &str) -> String {
    let mut lines = rest.lines();
    let same_line = lines.next().unwrap_or_default().trim();
    if !same_line.is_empty() {
        return same_line.to_string();
    }

    lines
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
