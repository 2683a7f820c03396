//! Small helpers for turning bundle words into regular expressions and for
//! tidying matched text.

use regex::{Regex, RegexBuilder};

use resumeparser_shared::{ResumeParserError, Result};

/// Build `a|b|c` from plain words, escaping each and letting inner spaces
/// match any whitespace run. Longer words come first so that at a given
/// position "Work Experience" beats "Work".
///
/// Returns `None` for an empty list (the rule never matches).
pub(crate) fn word_alternation(words: &[String]) -> Option<String> {
    let mut escaped: Vec<String> = words
        .iter()
        .map(|w| w.split_whitespace().map(regex::escape).collect::<Vec<_>>().join(r"\s+"))
        .filter(|w| !w.is_empty())
        .collect();

    if escaped.is_empty() {
        return None;
    }

    escaped.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    escaped.dedup();
    Some(escaped.join("|"))
}

/// Compile a bundle pattern, reporting failures as config errors.
pub(crate) fn compile(what: &str, source: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|e| ResumeParserError::config(format!("invalid {what}: {e}")))
}

/// Compile a `^Label:` pattern from a word list, or `None` when empty.
pub(crate) fn compile_line_label(
    what: &str,
    words: &[String],
    case_insensitive: bool,
) -> Result<Option<Regex>> {
    word_alternation(words)
        .map(|alt| compile(what, &format!(r"^(?:{alt})[ \t]*:[ \t]*"), case_insensitive))
        .transpose()
}

/// Trim whitespace and list punctuation left around a field after other
/// matches were cut out of it.
pub(crate) fn trim_separators(s: &str) -> &str {
    s.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, ',' | ';' | ':' | '|' | '-' | '–' | '—' | '•' | '(' | ')')
    })
}

/// Remove every match of `patterns` from `line`, then collapse whitespace
/// and trim separators.
pub(crate) fn strip_matches(line: &str, patterns: &[&Regex]) -> String {
    let mut out = line.to_string();
    for re in patterns {
        out = re.replace_all(&out, " ").into_owned();
    }
    let collapsed = out.split_whitespace().collect::<Vec<_>>().join(" ");
    trim_separators(&collapsed).to_string()
}
