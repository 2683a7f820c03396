//! Contact info: email and phone.
//!
//! Language-agnostic, so these run on the full text whichever strategy was
//! resolved.

use std::sync::LazyLock;

use regex::Regex;

use resumeparser_shared::{ContactInfo, EmailEntry, PhoneEntry};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

/// Phone layouts in priority order. Each is tried over the whole text before
/// the next, so a full number anywhere beats a seven-digit run earlier on.
static PHONE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b\d{3}[-. ]?\d{3}[-. ]?\d{4}\b",
        r"\(\d{3}\)[ \t]*\d{3}[-. ]?\d{4}\b",
        r"\b\d{3}[-. ]?\d{4}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid phone regex"))
    .collect()
});

/// First email address in `text`.
pub fn extract_email(text: &str) -> Option<&str> {
    EMAIL.find(text).map(|m| m.as_str())
}

/// First phone number in `text`, by layout priority.
pub fn extract_phone(text: &str) -> Option<&str> {
    PHONE
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str())
}

/// Contact group for `text`. Unmatched fields are empty lists.
pub fn extract(text: &str) -> ContactInfo {
    ContactInfo {
        email: extract_email(text)
            .map(|value| EmailEntry {
                value: value.to_string(),
            })
            .into_iter()
            .collect(),
        phone: extract_phone(text)
            .map(PhoneEntry::telephone)
            .into_iter()
            .collect(),
        ..ContactInfo::default()
    }
}
