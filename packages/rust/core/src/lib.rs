//! Resume field and section extraction for ResumeParser.
//!
//! This crate segments resume text into labeled sections and pulls
//! structured fields out of it with per-language pattern strategies, then
//! assembles the canonical [`ResumeRecord`](resumeparser_shared::ResumeRecord).

pub mod assembler;
pub mod extractors;
mod patterns;
pub mod segmenter;
pub mod strategy;

pub use assembler::{ResumeParser, assemble};
pub use strategy::{LanguageStrategy, NoopStrategy, PatternStrategy, StrategyRegistry};
