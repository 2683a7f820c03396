//! Education entries from the education block.

use resumeparser_shared::EducationEntry;

use super::{EntryRules, date_range, entry_lines, split_entries};
use crate::patterns::strip_matches;
use crate::segmenter::SectionBlock;

/// One entry per delimited chunk of the block.
///
/// The first line names the school and the remaining lines form the
/// description. Degree and year range are searched anywhere in the entry,
/// and whatever they matched is cut out of the school line. When that leaves
/// nothing (a line holding only the degree or the dates), the next line that
/// still has text names the school instead.
pub fn extract(block: &SectionBlock<'_>, rules: &EntryRules) -> Vec<EducationEntry> {
    split_entries(block.text, &rules.delimiter)
        .into_iter()
        .map(|entry| parse_entry(entry, rules))
        .collect()
}

fn parse_entry(entry: &str, rules: &EntryRules) -> EducationEntry {
    let lines = entry_lines(entry);

    let mut cut = vec![&rules.date_range];
    if let Some(degree) = &rules.degree {
        cut.push(degree);
    }

    let school = lines
        .iter()
        .enumerate()
        .map(|(i, line)| (i, strip_matches(line, &cut)))
        .find(|(_, school)| !school.is_empty());
    let school_at = school.as_ref().map(|(i, _)| *i);

    let description: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != school_at)
        .map(|(_, line)| *line)
        .collect();

    let mut out = EducationEntry {
        school: school.map(|(_, name)| name).unwrap_or_default(),
        description: description.join("\n"),
        ..EducationEntry::default()
    };

    if let Some(caps) = rules.degree.as_ref().and_then(|re| re.captures(entry)) {
        out.degree_name = caps[0].split_whitespace().collect::<Vec<_>>().join(" ");
        out.degree_major = caps.get(2).map_or("", |m| m.as_str().trim()).to_string();
    }

    if let Some((start, end)) = date_range(entry, &rules.date_range) {
        out.start_date = start;
        out.end_date = end;
    }

    out
}

#[cfg(test)]
mod tests {
    use resumeparser_shared::SectionLabel;

    use super::*;
    use crate::extractors::test_support::english_rules;

    fn block(text: &str) -> SectionBlock<'_> {
        SectionBlock {
            label: SectionLabel::Education,
            span: Some(0..text.len()),
            text,
        }
    }

    #[test]
    fn school_and_dates_from_one_line() {
        let entries = extract(&block(" Tech University 2015 - 2019\n\n"), &english_rules());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].school, "Tech University");
        assert_eq!(entries[0].start_date, "2015");
        assert_eq!(entries[0].end_date, "2019");
        assert_eq!(entries[0].description, "");
    }

    #[test]
    fn degree_and_description() {
        let text = "\nState College, Bachelor of Science 2010 – Present\nGPA 3.8\nDean's list\n";
        let entries = extract(&block(text), &english_rules());
        let entry = &entries[0];
        assert_eq!(entry.school, "State College");
        assert_eq!(entry.degree_name, "Bachelor of Science");
        assert_eq!(entry.degree_major, "Science");
        assert_eq!(entry.start_date, "2010");
        assert_eq!(entry.end_date, "Present");
        assert_eq!(entry.description, "GPA 3.8\nDean's list");
    }

    #[test]
    fn degree_on_a_later_line() {
        let text = "Tech University\nMaster of Computer Science\n2019 - 2021";
        let entry = &extract(&block(text), &english_rules())[0];
        assert_eq!(entry.school, "Tech University");
        assert_eq!(entry.degree_name, "Master of Computer Science");
        assert_eq!(entry.degree_major, "Computer Science");
        assert_eq!(entry.start_date, "2019");
    }

    #[test]
    fn degree_first_layout_takes_school_from_next_line() {
        let text = "Bachelor of Science\nTech University\n2015 - 2019";
        let entry = &extract(&block(text), &english_rules())[0];
        assert_eq!(entry.school, "Tech University");
        assert_eq!(entry.degree_name, "Bachelor of Science");
        assert_eq!(entry.start_date, "2015");
        assert_eq!(entry.description, "Bachelor of Science\n2015 - 2019");
    }

    #[test]
    fn dates_only_entry_keeps_every_line_in_description() {
        let entry = &extract(&block("2015 - 2019
Bachelor of Arts"), &english_rules())[0];
        assert_eq!(entry.school, "");
        assert_eq!(entry.description, "2015 - 2019\nBachelor of Arts");
        assert_eq!(entry.degree_name, "Bachelor of Arts");
    }

    #[test]
    fn several_entries() {
        let text = "Tech University 2015 - 2019\n\n  \nCity High School 2011 - 2015\n";
        let entries = extract(&block(text), &english_rules());
        let schools: Vec<_> = entries.iter().map(|e| e.school.as_str()).collect();
        assert_eq!(schools, vec!["Tech University", "City High School"]);
    }

    #[test]
    fn no_degree_rule_leaves_degree_blank() {
        let rules = EntryRules {
            degree: None,
            ..english_rules()
        };
        let entry = &extract(&block("Tech University\nBachelor of Arts"), &rules)[0];
        assert_eq!(entry.degree_name, "");
        assert_eq!(entry.school, "Tech University");
    }

    #[test]
    fn missing_block_has_no_entries() {
        assert!(extract(&SectionBlock::missing(SectionLabel::Education), &english_rules()).is_empty());
    }
}
