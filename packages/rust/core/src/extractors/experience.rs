//! Experience entries from the experience block.

use resumeparser_shared::ExperienceEntry;

use super::{EntryRules, date_range, entry_lines, split_entries};
use crate::patterns::strip_matches;
use crate::segmenter::SectionBlock;

/// One entry per delimited chunk of the block.
///
/// Positional layout: title, employer, then description. A line starting
/// with an employer label (`Company: Acme`) names the employer wherever it
/// sits and is left out of the positional layout.
pub fn extract(block: &SectionBlock<'_>, rules: &EntryRules) -> Vec<ExperienceEntry> {
    split_entries(block.text, &rules.delimiter)
        .into_iter()
        .map(|entry| parse_entry(entry, rules))
        .collect()
}

fn parse_entry(entry: &str, rules: &EntryRules) -> ExperienceEntry {
    let mut labeled_employer = None;
    let mut positional = Vec::new();

    for line in entry_lines(entry) {
        let label = rules.employer_label.as_ref().and_then(|re| re.find(line));
        match label {
            Some(m) if labeled_employer.is_none() => labeled_employer = Some(&line[m.end()..]),
            _ => positional.push(line),
        }
    }

    let mut rest = positional.into_iter();
    let title = rest.next().unwrap_or_default();
    let employer = match labeled_employer {
        Some(employer) => employer,
        None => rest.next().unwrap_or_default(),
    };
    let description = rest.collect::<Vec<_>>().join("\n");

    let mut out = ExperienceEntry {
        title: strip_matches(title, &[&rules.date_range]),
        employer: strip_matches(employer, &[&rules.date_range]),
        description: strip_description_label(&description, rules),
        ..ExperienceEntry::default()
    };

    if let Some((start, end)) = date_range(entry, &rules.date_range) {
        out.start_date = start;
        out.end_date = end;
    }

    out
}

fn strip_description_label(description: &str, rules: &EntryRules) -> String {
    match rules.description_label.as_ref().and_then(|re| re.find(description)) {
        Some(m) => description[m.end()..].trim().to_string(),
        None => description.to_string(),
    }
}
