//! A mask generator for floating-point lexemes, where **only the first `precision`
//! fractional digits matter**.
//!
//! The whole part is compared with the integer rules. The fractional part is
//! compared digit by digit after padding the source with trailing zeros, so
//! `1.5` and `1.50` are equal. Once a digit differs, it and every later digit
//! inside the precision window are flagged. Digits are compared literally:
//! `0.999` against `1.000` is a mismatch, no rounding is applied.

use crate::masks::int_mask::IntMask;
use crate::traits::mask_generator::MaskGenerator;
use std::iter;

pub struct FloatMask {
    precision: u32,
}

impl FloatMask {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    fn fraction_mask(
        &self,
        target_frac: &str,
        source_frac: &str,
    ) -> impl Iterator<Item = bool> {
        let precision = self.precision as usize;
        let mut source_digits = source_frac.chars().chain(iter::repeat('0'));
        let mut equal = true;

        target_frac.chars().enumerate().map(move |(i, t)| {
            if source_digits.next() != Some(t) {
                equal = false;
            }
            !equal && i < precision
        })
    }
}

impl MaskGenerator for FloatMask {
    fn generate(&self, target: &str, source: &str) -> Vec<bool> {
        let (source_whole, source_frac) = source.split_once('.').unwrap_or((source, ""));
        let source_whole = if source_whole.is_empty() { "0" } else { source_whole };

        let Some((target_whole, target_frac)) = target.split_once('.') else {
            return IntMask.generate(target, source_whole);
        };

        let mut mask = IntMask.generate(target_whole, source_whole);
        // the decimal point itself is never flagged
        mask.push(false);
        mask.extend(self.fraction_mask(target_frac, source_frac));
        mask
    }
}
