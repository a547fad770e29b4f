//! A mask generator that compares lexemes character by character, where **position matters**.
//!
//! Used whenever at least one of the two lexemes is not a number, so no numeric
//! leniency applies.

use crate::traits::mask_generator::MaskGenerator;

/// Flags every character of the target that differs from the source character
/// at the same position. Characters past the end of the source are always
/// flagged, since nothing in the source corresponds to them.
pub struct StringMask;

impl MaskGenerator for StringMask {
    fn generate(&self, target: &str, source: &str) -> Vec<bool> {
        let mut source_chars = source.chars();

        target
            .chars()
            .map(|t| source_chars.next() != Some(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(StringMask.generate("abc", "abc"), vec![false, false, false]);
    }

    #[test]
    fn test_single_difference() {
        assert_eq!(StringMask.generate("abc", "abd"), vec![false, false, true]);
    }

    #[test]
    fn test_source_shorter_flags_tail() {
        assert_eq!(StringMask.generate("abcd", "ab"), vec![false, false, true, true]);
    }

    #[test]
    fn test_source_longer_is_ignored_past_target() {
        assert_eq!(StringMask.generate("ab", "abcd"), vec![false, false]);
    }

    #[test]
    fn test_empty_source_flags_everything() {
        assert_eq!(StringMask.generate("xyz", ""), vec![true, true, true]);
        assert_eq!(StringMask.generate("\n", ""), vec![true]);
    }

    #[test]
    fn test_mask_counts_characters_not_bytes() {
        let mask = StringMask.generate("héllo", "hallo");
        assert_eq!(mask, vec![false, true, false, false, false]);
    }

    #[test]
    fn test_numeric_looking_strings_compare_exactly() {
        assert_eq!(StringMask.generate("12x", "012x"), vec![true, true, true]);
    }
}
