//! # Types Module
//!
//! Data structures produced by a comparison. Both are created fresh for every
//! call and serialize to JSON for consumers that compute verdicts elsewhere.

use serde::{Deserialize, Serialize};

/// An expected lexeme together with the characters to highlight in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    /// The lexeme text, as it appeared in the expected output.
    pub text: String,
    /// One entry per character of `text`; `true` marks a mismatch.
    pub mask: Vec<bool>,
}

impl RichText {
    pub fn new(text: impl Into<String>, mask: Vec<bool>) -> Self {
        Self {
            text: text.into(),
            mask,
        }
    }

    /// Whether any character is flagged.
    pub fn colorful(&self) -> bool {
        self.mask.iter().any(|&flag| flag)
    }
}

/// The outcome of comparing an expected lexeme sequence with an actual one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LexComparison {
    /// Exactly one entry per expected lexeme, in order.
    pub rich_texts: Vec<RichText>,
    /// False if any entry is flagged or the actual output ran out early.
    pub matched: bool,
}

impl LexComparison {
    /// Number of expected lexemes that carry at least one flagged character.
    pub fn mismatch_count(&self) -> usize {
        self.rich_texts.iter().filter(|rt| rt.colorful()).count()
    }
}
