//! Shared types, error model, and configuration for ResumeParser.
//!
//! This crate is the foundation depended on by all other ResumeParser crates.
//! It provides:
//! - [`ResumeParserError`] — the unified error type
//! - Domain types ([`ResumeRecord`], [`RawDocument`], [`LanguageCode`], [`SectionLabel`])
//! - Configuration ([`AppConfig`], [`LanguageBundle`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AUTO_LANGUAGE, AppConfig, DefaultsConfig, HeadingConfig, LanguageBundle, config_dir,
    config_file_path, init_config, load_config, load_config_from,
};
pub use error::{ResumeParserError, Result};
pub use types::{
    ContactInfo, DocumentFormat, EducationEntry, EmailEntry, ExperienceEntry, LanguageCode,
    PersonalInfo, PhoneEntry, RawDocument, ResumeRecord, SectionLabel, SummaryInfo,
};
