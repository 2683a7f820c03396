//! Language strategy trait and registry.
//!
//! A strategy bundles everything language-specific: section headings, the
//! name pattern, summary labels, and entry rules. The registry maps language
//! codes to strategies; codes without a bundle resolve to [`NoopStrategy`].
//! Nothing outside this module branches on a language code.

mod builtin;
mod noop;
mod pattern;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use resumeparser_shared::{
    AppConfig, EducationEntry, ExperienceEntry, LanguageCode, Result, SummaryInfo,
};

use crate::extractors::personal::NameMatch;
use crate::segmenter::{SectionBlock, Sections};

pub use builtin::{english_bundle, german_bundle};
pub use noop::NoopStrategy;
pub use pattern::PatternStrategy;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// The language-dependent capability set used by the assembler.
///
/// Every method is total: a rule that finds nothing yields an empty value.
pub trait LanguageStrategy: Send + Sync {
    /// Language code this strategy is registered under.
    fn code(&self) -> &str;

    /// Human-readable name for listings and tracing.
    fn name(&self) -> &str;

    /// Carve the full text into labeled section blocks.
    fn segment<'a>(&self, text: &'a str) -> Sections<'a>;

    /// First candidate full name in the full text.
    fn extract_name(&self, text: &str) -> Option<NameMatch>;

    /// Summary group from the full text.
    fn extract_summary(&self, text: &str) -> SummaryInfo;

    /// Education entries from the education block.
    fn extract_education(&self, block: &SectionBlock<'_>) -> Vec<EducationEntry>;

    /// Experience entries from the experience block.
    fn extract_experience(&self, block: &SectionBlock<'_>) -> Vec<ExperienceEntry>;
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Read-only lookup from language code to strategy.
///
/// Built once, then shared (typically behind an `Arc`) by every parse call.
pub struct StrategyRegistry {
    strategies: HashMap<LanguageCode, Arc<dyn LanguageStrategy>>,
    fallback: NoopStrategy,
}

impl StrategyRegistry {
    /// A registry with no bundles; every code resolves to the fallback.
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
            fallback: NoopStrategy,
        }
    }

    /// A registry with the built-in bundles (`en`, `de`).
    pub fn new() -> Self {
        let english = PatternStrategy::compile(&english_bundle())
            .expect("built-in english bundle compiles");
        let german = PatternStrategy::compile(&german_bundle())
            .expect("built-in german bundle compiles");

        Self::empty()
            .with_strategy(Arc::new(english))
            .with_strategy(Arc::new(german))
    }

    /// Built-in bundles plus any `[[languages]]` from the config file.
    ///
    /// A configured bundle replaces a built-in one with the same code. Invalid
    /// patterns fail here, never during parsing.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut registry = Self::new();
        for bundle in &config.languages {
            let strategy = PatternStrategy::compile(bundle)?;
            debug!(code = %bundle.code, name = %bundle.name, "registered configured language bundle");
            registry = registry.with_strategy(Arc::new(strategy));
        }
        Ok(registry)
    }

    /// Register a strategy under its own code, replacing any previous one.
    pub fn with_strategy(mut self, strategy: Arc<dyn LanguageStrategy>) -> Self {
        self.strategies
            .insert(LanguageCode::new(strategy.code()), strategy);
        self
    }

    /// Resolve the strategy for `code`, falling back to [`NoopStrategy`].
    pub fn resolve(&self, code: &LanguageCode) -> &dyn LanguageStrategy {
        match self.strategies.get(code) {
            Some(strategy) => strategy.as_ref(),
            None => {
                debug!(%code, "no bundle registered, using no-op strategy");
                &self.fallback
            }
        }
    }

    /// Whether a bundle is registered for `code`.
    pub fn is_registered(&self, code: &LanguageCode) -> bool {
        self.strategies.contains_key(code)
    }

    /// Registered `(code, name)` pairs, sorted by code.
    pub fn languages(&self) -> Vec<(&str, &str)> {
        let mut langs: Vec<_> = self
            .strategies
            .values()
            .map(|s| (s.code(), s.name()))
            .collect();
        langs.sort();
        langs
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
