//! # Judge Library
//!
//! This crate decides whether a program's actual output matches the expected output of a
//! test case, with the leniency competitive-programming judges usually allow, and annotates
//! every expected lexeme with the characters that did not match.
//!
//! ## Key Concepts
//! - **Lexeme**: a maximal run of non-whitespace characters, or a single newline.
//! - **LexemeType**: string, float or int. Two lexemes are compared at their common type.
//! - **Mask Generators**: pluggable per-type strategies producing a highlight mask.
//! - **Lexer**: scans texts and aligns expected against actual lexemes, tolerating extra
//!   blank lines in the actual output.
//!
//! ## Example
//!
//! ```rust
//! use judge::Lexer;
//!
//! let lexer = Lexer::new(6);
//! let result = lexer.compare_text("7 1.50\n", "+007  1.5\n\n");
//! assert!(result.matched);
//! ```

pub mod highlight;
pub mod lexeme;
pub mod masks;
pub mod scanner;
pub mod traits;
pub mod types;

use crate::lexeme::{common_type, LexemeType};
use crate::masks::{FloatMask, IntMask, StringMask};
use crate::traits::mask_generator::MaskGenerator;
use crate::types::{LexComparison, RichText};

use common::config::Config;
use tracing::{debug, trace};

const NEWLINE: &str = "\n";

/// Scans and compares lexeme sequences.
///
/// Holds no state besides the float precision, so one `Lexer` can be shared by
/// any number of concurrent comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexer {
    precision: u32,
}

impl Lexer {
    /// Create a lexer comparing at most `precision` fractional digits of floats.
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    /// Create a lexer using the precision from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.precision)
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Break `text` into lexemes. See [`scanner`] for the rules.
    pub fn scan<'a>(&self, text: &'a str) -> Vec<&'a str> {
        scanner::scan(text)
    }

    /// Build the mask for one pair of lexemes, using the generator for their
    /// common type.
    pub fn generate_mask(&self, target: &str, source: &str) -> Vec<bool> {
        match common_type(target, source) {
            LexemeType::String => StringMask.generate(target, source),
            LexemeType::Float => FloatMask::new(self.precision).generate(target, source),
            LexemeType::Int => IntMask.generate(target, source),
        }
    }

    /// Compare the expected lexemes (`target`) against the actual ones (`source`).
    ///
    /// # Returns
    /// A [`LexComparison`] with one [`RichText`] per expected lexeme.
    ///
    /// # Alignment
    /// 1. Expected newlines met while the actual lexeme is not a newline are missing
    ///    line breaks: each is flagged and consumed on its own.
    /// 2. Actual newlines met while the expected lexeme is not a newline are extra
    ///    blank lines: they are skipped silently.
    /// 3. Remaining pairs are compared at their common type.
    /// 4. Expected lexemes left over once the actual output runs out are flagged in full.
    ///
    /// Extra actual lexemes after the last expected one do not affect the result.
    pub fn compare<T, S>(&self, target: &[T], source: &[S]) -> LexComparison
    where
        T: AsRef<str>,
        S: AsRef<str>,
    {
        let mut rich_texts = Vec::with_capacity(target.len());
        let mut matched = true;
        let (mut ti, mut si) = (0, 0);

        while ti < target.len() && si < source.len() {
            if source[si].as_ref() != NEWLINE {
                while ti < target.len() && target[ti].as_ref() == NEWLINE {
                    trace!(expected_index = ti, "missing line break");
                    rich_texts.push(RichText::new(NEWLINE, vec![true]));
                    matched = false;
                    ti += 1;
                }
            } else if target[ti].as_ref() != NEWLINE {
                let skipped_from = si;
                while si < source.len() && source[si].as_ref() == NEWLINE {
                    si += 1;
                }
                trace!(
                    actual_index = skipped_from,
                    skipped = si - skipped_from,
                    "skipped blank lines"
                );
            }

            if ti == target.len() || si == source.len() {
                break;
            }

            let xm = target[ti].as_ref();
            let rich_text = RichText::new(xm, self.generate_mask(xm, source[si].as_ref()));
            if rich_text.colorful() {
                trace!(
                    expected_index = ti,
                    expected = xm,
                    actual = source[si].as_ref(),
                    "lexeme mismatch"
                );
                matched = false;
            }
            rich_texts.push(rich_text);

            ti += 1;
            si += 1;
        }

        if ti < target.len() {
            trace!(missing = target.len() - ti, "actual output ended early");
            matched = false;
        }
        for xm in &target[ti..] {
            let xm = xm.as_ref();
            rich_texts.push(RichText::new(xm, StringMask.generate(xm, "")));
        }

        debug!(
            expected = target.len(),
            actual = source.len(),
            precision = self.precision,
            matched,
            "compared lexeme sequences"
        );

        LexComparison { rich_texts, matched }
    }

    /// Scan both texts and compare them.
    pub fn compare_text(&self, expected: &str, actual: &str) -> LexComparison {
        self.compare(&self.scan(expected), &self.scan(actual))
    }
}
