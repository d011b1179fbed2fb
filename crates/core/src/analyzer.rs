//! Linguistic Analyzer Seam
//!
//! The turn pipeline consumes tokenization and lemmatization through this
//! trait so the concrete analyzer stays swappable. The default rule-based
//! implementation lives in the nlu crate; callers may plug in anything that
//! produces lowercase lemmas.

use crate::error::Result;

/// One analyzed token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercase lemma used for trigger-keyword comparison
    pub lemma: String,
    /// Whether this token came out of the hyphen merge pass
    pub merged: bool,
}

impl Token {
    /// Plain token with no merge flag
    pub fn new(lemma: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            merged: false,
        }
    }

    /// Token produced by merging a hyphenated compound
    pub fn merged(lemma: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            merged: true,
        }
    }
}

/// Tokenize and lemmatize free text
///
/// Implementations must be deterministic and must run the hyphen merge pass
/// (alphabetic-hyphen-alphabetic runs collapse into one token) before
/// emitting tokens; spans that fail to merge are skipped silently. The call
/// is synchronous and may carry latency; callers own timeout policy.
pub trait LinguisticAnalyzer: Send + Sync {
    /// Analyze text into lemmas
    ///
    /// Errors map to `Error::AnalyzerUnavailable` at the facade.
    fn analyze(&self, text: &str) -> Result<Vec<Token>>;
}
