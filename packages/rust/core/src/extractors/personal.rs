//! Personal info: the candidate name.

use regex::Regex;

use resumeparser_shared::PersonalInfo;

/// A name candidate split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    pub full_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub family_name: String,
}

impl NameMatch {
    /// Split a matched name on whitespace. The first token is the given
    /// name, the last the family name, anything between the middle name.
    pub fn from_full(full: &str) -> Self {
        let tokens: Vec<&str> = full.split_whitespace().collect();
        let (first, middle, family) = match tokens.as_slice() {
            [] => ("", String::new(), ""),
            [only] => (*only, String::new(), ""),
            [first, middle @ .., last] => (*first, middle.join(" "), *last),
        };

        Self {
            full_name: tokens.join(" "),
            first_name: first.to_string(),
            middle_name: middle,
            family_name: family.to_string(),
        }
    }
}

/// First match of `pattern` in `text`.
///
/// No cross-check against headings or other fields is made, so a pair of
/// capitalized heading words can be picked up as a name.
pub fn extract_name(text: &str, pattern: &Regex) -> Option<NameMatch> {
    pattern
        .find(text)
        .map(|m| NameMatch::from_full(m.as_str()))
        .filter(|name| !name.full_name.is_empty())
}

/// Personal group for a name candidate. Fields with no extraction rule stay
/// at their empty defaults.
pub fn build(name: Option<NameMatch>) -> PersonalInfo {
    match name {
        Some(name) => PersonalInfo {
            full_name: Some(name.full_name),
            first_name: name.first_name,
            middle_name: name.middle_name,
            family_name: name.family_name,
            ..PersonalInfo::default()
        },
        None => PersonalInfo::default(),
    }
}

#[cfg(test)]
mod tests {
    use resumeparser_shared::config::default_name_pattern;

    use super::*;

    fn name_pattern() -> Regex {
        Regex::new(&default_name_pattern()).unwrap()
    }

    #[test]
    fn first_two_capitalized_tokens() {
        let name = extract_name("John Doe\njohn.doe@example.com", &name_pattern()).unwrap();
        assert_eq!(name.full_name, "John Doe");
        assert_eq!(name.first_name, "John");
        assert_eq!(name.family_name, "Doe");
        assert_eq!(name.middle_name, "");
    }

    #[test]
    fn tokens_must_share_a_line() {
        assert!(extract_name("John\nDoe", &name_pattern()).is_none());
    }

    #[test]
    fn unicode_names_match() {
        let name = extract_name("Curriculum vitae\nJürgen Müller", &name_pattern()).unwrap();
        assert_eq!(name.full_name, "Jürgen Müller");
    }

    #[test]
    fn heading_words_can_be_mistaken_for_a_name() {
        let name = extract_name("Work Experience\nJohn Doe", &name_pattern()).unwrap();
        assert_eq!(name.full_name, "Work Experience");
    }

    #[test]
    fn inner_capital_family_name_is_not_matched() {
        assert!(extract_name("Ronald McDonald\nronald@example.com", &name_pattern()).is_none());
    }

    #[test]
    fn middle_tokens_become_middle_name() {
        let name = NameMatch::from_full("Mary  Ann\tLee");
        assert_eq!(name.full_name, "Mary Ann Lee");
        assert_eq!(name.middle_name, "Ann");
        assert_eq!(name.family_name, "Lee");
    }

    #[test]
    fn build_without_name_is_empty() {
        let personal = build(None);
        assert_eq!(personal, PersonalInfo::default());
        assert_eq!(personal.full_name, None);
    }

    #[test]
    fn build_fills_name_fields_only() {
        let personal = build(Some(NameMatch::from_full("Jane Roe")));
        assert_eq!(personal.full_name.as_deref(), Some("Jane Roe"));
        assert_eq!(personal.first_name, "Jane");
        assert!(personal.nationality.is_empty());
        assert_eq!(personal.picture_url, None);
    }
}
