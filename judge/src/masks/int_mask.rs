//! A mask generator for integer lexemes, where **value matters, not spelling**.
//!
//! `007`, `7` and `+7` are all the same number. A wrong sign flags only the
//! sign position; a wrong magnitude flags the whole numeral.

use crate::traits::mask_generator::MaskGenerator;

pub struct IntMask;

/// Digits of the absolute value without sign and leading zeros. Zero (and a
/// bare sign) becomes the empty string.
fn magnitude(xm: &str) -> &str {
    xm.strip_prefix(&['+', '-'][..])
        .unwrap_or(xm)
        .trim_start_matches('0')
}

fn sign_conflicts(target: &str, source: &str) -> bool {
    let target_negative = target.starts_with('-');
    let target_positive = target.starts_with('+');
    let source_negative = source.starts_with('-');

    target_negative && !source_negative || target_positive && source_negative
}

impl MaskGenerator for IntMask {
    fn generate(&self, target: &str, source: &str) -> Vec<bool> {
        let mut mask = vec![false; target.chars().count()];

        if target.is_empty() || source.is_empty() {
            return mask;
        }

        if sign_conflicts(target, source) {
            mask[0] = true;
        }

        if magnitude(target) != magnitude(source) {
            mask.fill(true);
        }

        mask
    }
}
