//! Rule-Based Linguistic Analyzer
//!
//! The default `LinguisticAnalyzer` implementation: unicode word
//! tokenization, a hyphen merge pass, and a small English suffix
//! lemmatizer. The lemmatizer only has to be exact over the closed trigger
//! vocabulary (base keywords plus synonym tables); it is not a general
//! English lemmatizer, and the trait seam keeps a heavier analyzer
//! pluggable.

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use travel_agent_core::{LinguisticAnalyzer, Result, Token};

/// Default analyzer
pub struct RuleAnalyzer {
    /// Alphabetic-hyphen-alphabetic runs merge into one token before the
    /// trigger scan
    hyphenated: Regex,
}

impl RuleAnalyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self {
            hyphenated: Regex::new(r"[A-Za-z]+(?:-[A-Za-z]+)+").unwrap(),
        }
    }

    fn lemma(word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some(irregular) = Self::irregular(&lower) {
            return irregular.to_string();
        }
        Self::strip_suffix(&lower)
    }

    /// Irregular and inflected forms of the trigger vocabulary
    fn irregular(word: &str) -> Option<&'static str> {
        let lemma = match word {
            "went" | "goes" | "going" | "gone" => "go",
            "wants" | "wanted" | "wanting" => "want",
            "likes" | "liked" | "liking" => "like",
            "recommends" | "recommended" | "recommending" => "recommend",
            "suggests" | "suggested" | "suggesting" => "suggest",
            "finds" | "found" | "finding" => "find",
            "travels" | "traveled" | "travelled" | "traveling" | "travelling" => "travel",
            "relaxes" | "relaxed" | "relaxing" => "relax",
            _ => return None,
        };
        Some(lemma)
    }

    fn strip_suffix(word: &str) -> String {
        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return format!("{stem}y");
            }
        }
        if word.len() > 3 {
            for base in ["sh", "ch", "ss", "x", "z"] {
                if let Some(stem) = word.strip_suffix("es") {
                    if stem.ends_with(base) {
                        return stem.to_string();
                    }
                }
            }
        }
        if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
            return word[..word.len() - 1].to_string();
        }
        word.to_string()
    }

    fn push_words(text: &str, tokens: &mut Vec<Token>) {
        for word in text.unicode_words() {
            tokens.push(Token::new(Self::lemma(word)));
        }
    }
}

impl Default for RuleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LinguisticAnalyzer for RuleAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut cursor = 0;

        for span in self.hyphenated.find_iter(text) {
            Self::push_words(&text[cursor..span.start()], &mut tokens);
            // Whole compound becomes a single lowercase token; no suffix
            // stripping across the hyphen.
            tokens.push(Token::merged(span.as_str().to_lowercase()));
            cursor = span.end();
        }
        Self::push_words(&text[cursor..], &mut tokens);

        tracing::trace!(token_count = tokens.len(), "analyzed input");
        Ok(tokens)
    }
}
