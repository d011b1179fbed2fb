//! Natural language understanding for the travel agent
//!
//! - `analyzer`: the default rule-based `LinguisticAnalyzer` (tokenization,
//!   hyphen merging, suffix lemmatization)
//! - `extractor`: intent detection and slot filling against the synonym
//!   tables, merging results into the conversation context

pub mod analyzer;
pub mod extractor;

pub use analyzer::RuleAnalyzer;
pub use extractor::IntentExtractor;
