//! # Lexeme Classification
//!
//! Decides how specific a lexeme is as a number. Every lexeme is a string;
//! some strings are floats; some floats are (small) integers.
//!
//! The type of a pair of lexemes is the least specific of their two types, so
//! numeric leniency only applies when both sides look like numbers.

use serde::{Deserialize, Serialize};

/// Longest lexeme (in bytes, sign included) still treated as an integer.
pub const VALID_INT_MAX_LEN: usize = 10;

/// Lexeme types ordered from least to most specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexemeType {
    String,
    Float,
    Int,
}

/// Checkers in increasing order of specificity. A lexeme gets the type of the
/// last checker it passes before the first one it fails.
const TYPE_CHECKERS: [(fn(&str) -> bool, LexemeType); 2] = [
    (is_float_lexeme, LexemeType::Float),
    (is_int_lexeme, LexemeType::Int),
];

/// True if `xm` is a base-10 signed integer that fits in an `i64` and is at
/// most [`VALID_INT_MAX_LEN`] bytes long.
pub fn is_int_lexeme(xm: &str) -> bool {
    xm.len() <= VALID_INT_MAX_LEN && xm.parse::<i64>().is_ok()
}

/// True if `xm`, after one optional sign, is made of digits and at most one
/// decimal point, and is not a lone decimal point. A bare sign qualifies.
pub fn is_float_lexeme(xm: &str) -> bool {
    if xm.is_empty() {
        return false;
    }

    let unsigned = xm.strip_prefix(&['+', '-'][..]).unwrap_or(xm);

    let mut dots = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => {}
            '.' => dots += 1,
            _ => return false,
        }
    }

    // 1.2.3 and friends
    dots <= 1 && unsigned != "."
}

pub fn deduce_lexeme_type(xm: &str) -> LexemeType {
    let mut deduced = LexemeType::String;

    for (check, lexeme_type) in TYPE_CHECKERS {
        if !check(xm) {
            break;
        }
        deduced = lexeme_type;
    }

    deduced
}

/// The most specific type both lexemes share.
pub fn common_type(a: &str, b: &str) -> LexemeType {
    deduce_lexeme_type(a).min(deduce_lexeme_type(b))
}
