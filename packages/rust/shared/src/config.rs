//! Application configuration for ResumeParser.
//!
//! User config lives at `~/.resumeparser/resumeparser.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ResumeParserError, Result};
use crate::types::{LanguageCode, SectionLabel};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "resumeparser.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".resumeparser";

/// Value of `defaults.language` that enables automatic detection.
pub const AUTO_LANGUAGE: &str = "auto";

// ---------------------------------------------------------------------------
// Config structs (matching resumeparser.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Extra language bundles. A bundle whose code matches a built-in one
    /// replaces it.
    #[serde(default)]
    pub languages: Vec<LanguageBundle>,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Language code to force, or `"auto"` to detect per document.
    #[serde(default = "default_language")]
    pub language: String,

    /// Directory JSON records are written to when parsing several files.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            output_dir: default_output_dir(),
            pretty: true,
        }
    }
}

impl DefaultsConfig {
    /// The forced language, if detection is disabled.
    pub fn language_override(&self) -> Option<LanguageCode> {
        let lang = self.language.trim();
        if lang.is_empty() || lang.eq_ignore_ascii_case(AUTO_LANGUAGE) {
            None
        } else {
            Some(LanguageCode::new(lang))
        }
    }
}

fn default_language() -> String {
    AUTO_LANGUAGE.into()
}
fn default_output_dir() -> String {
    "parsed".into()
}
fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Language bundles
// ---------------------------------------------------------------------------

/// `[[languages]]` entry — the pattern set used for one language code.
///
/// Labels and heading aliases are plain words (regex-escaped on compile);
/// `name_pattern`, `entry_delimiter`, `degree_pattern` and
/// `date_range_pattern` are regular expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageBundle {
    /// ISO 639-1 code this bundle is registered under.
    pub code: String,

    /// Human-readable name.
    pub name: String,

    /// Match headings and labels regardless of case.
    #[serde(default = "default_true")]
    pub case_insensitive: bool,

    /// Only recognize a heading when it starts a line (leading blanks allowed).
    #[serde(default)]
    pub headings_at_line_start: bool,

    /// Pattern for a full name; the first match wins.
    #[serde(default = "default_name_pattern")]
    pub name_pattern: String,

    /// Labels that introduce the summary text.
    #[serde(default)]
    pub summary_labels: Vec<String>,

    /// Section headings, in output order.
    #[serde(default)]
    pub headings: Vec<HeadingConfig>,

    /// Pattern separating entries inside a section block.
    #[serde(default = "default_entry_delimiter")]
    pub entry_delimiter: String,

    /// Degree pattern. Group 1 is the degree level, group 2 the field.
    #[serde(default)]
    pub degree_pattern: Option<String>,

    /// Year-range pattern. Group 1 is the start, group 2 the end.
    #[serde(default = "default_date_range_pattern")]
    pub date_range_pattern: String,

    /// Labels that mark an explicit employer line in an experience entry.
    #[serde(default)]
    pub employer_labels: Vec<String>,

    /// Labels stripped from the front of an experience description.
    #[serde(default)]
    pub description_labels: Vec<String>,
}

/// One section heading with its aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingConfig {
    pub label: SectionLabel,
    pub aliases: Vec<String>,
}

impl HeadingConfig {
    pub fn new(label: SectionLabel, aliases: &[&str]) -> Self {
        Self {
            label,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Two consecutive capitalized tokens on one line.
///
/// Each token is one capital followed by lowercase letters only, so names
/// with an inner capital such as "McDonald" or "DeWitt" do not match. Supply
/// a broader `name_pattern` in the bundle to accept them.
pub fn default_name_pattern() -> String {
    r"\b\p{Lu}\p{Ll}+[ \t]+\p{Lu}\p{Ll}+\b".into()
}

/// Blank-line boundaries (whitespace-only lines count as blank).
pub fn default_entry_delimiter() -> String {
    r"\n[ \t]*\n".into()
}

/// `YYYY - YYYY` or `YYYY - Present`, with a hyphen or en dash.
pub fn default_date_range_pattern() -> String {
    r"\b(\d{4})[ \t]*[-–][ \t]*(\d{4}|Present)\b".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.resumeparser/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ResumeParserError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.resumeparser/resumeparser.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ResumeParserError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        ResumeParserError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ResumeParserError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| ResumeParserError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ResumeParserError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("language = \"auto\""));
        assert!(toml_str.contains("output_dir"));
    }

    #[test]
    fn auto_language_means_no_override() {
        let defaults = DefaultsConfig::default();
        assert_eq!(defaults.language_override(), None);

        let forced = DefaultsConfig {
            language: "EN".into(),
            ..DefaultsConfig::default()
        };
        assert_eq!(forced.language_override(), Some(LanguageCode::new("en")));
    }

    #[test]
    fn config_with_language_bundle() {
        let toml_str = r#"
[defaults]
language = "fr"
pretty = false

[[languages]]
code = "fr"
name = "French"
summary_labels = ["Profil", "Objectif"]

[[languages.headings]]
label = "education"
aliases = ["Formation"]

[[languages.headings]]
label = "experience"
aliases = ["Expérience professionnelle", "Expérience"]
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert!(!config.defaults.pretty);
        assert_eq!(config.defaults.output_dir, "parsed");
        assert_eq!(config.languages.len(), 1);

        let fr = &config.languages[0];
        assert!(fr.case_insensitive);
        assert!(!fr.headings_at_line_start);
        assert_eq!(fr.headings.len(), 2);
        assert_eq!(fr.headings[1].label, SectionLabel::Experience);
        assert_eq!(fr.entry_delimiter, default_entry_delimiter());
        assert_eq!(fr.degree_pattern, None);
    }

    #[test]
    fn malformed_config_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resumeparser.toml");
        std::fs::write(&path, "[defaults\nlanguage = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ResumeParserError::Config { .. }));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = load_config_from(Path::new("/nonexistent/resumeparser.toml")).unwrap_err();
        assert!(matches!(err, ResumeParserError::Io { .. }));
    }
}
