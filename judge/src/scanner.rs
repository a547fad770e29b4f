//! # Lexeme Scanner
//!
//! Breaks text into lexemes. A lexeme is either a maximal run of
//! non-whitespace characters or a single `"\n"`. Every other whitespace
//! character (as defined by [`char::is_whitespace`]) only separates lexemes.
//! Consecutive newlines produce one lexeme each, which is what lets the
//! aligner tell a blank line apart from a line break.

/// Lazy iterator over the lexemes of a text. Never yields an empty lexeme.
#[derive(Debug, Clone)]
pub struct Lexemes<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Lexemes<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Lexemes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];

        // Skip separators, stopping at a newline.
        let start = match rest.char_indices().find(|&(_, c)| c == '\n' || !c.is_whitespace()) {
            Some((offset, _)) => self.pos + offset,
            None => {
                self.pos = self.text.len();
                return None;
            }
        };

        let word = &self.text[start..];
        if word.starts_with('\n') {
            self.pos = start + 1;
            return Some(&self.text[start..start + 1]);
        }

        // A newline ends the word but stays in the input as its own lexeme.
        let end = word
            .char_indices()
            .find(|&(_, c)| c.is_whitespace())
            .map_or(self.text.len(), |(offset, _)| start + offset);

        self.pos = end;
        Some(&self.text[start..end])
    }
}

/// Scans the whole text eagerly.
pub fn scan(text: &str) -> Vec<&str> {
    Lexemes::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_newlines() {
        assert_eq!(scan("1 2\n3"), vec!["1", "2", "\n", "3"]);
    }

    #[test]
    fn test_consecutive_newlines_are_separate() {
        assert_eq!(scan("a\n\nb"), vec!["a", "\n", "\n", "b"]);
        assert_eq!(scan("\n\n"), vec!["\n", "\n"]);
    }

    #[test]
    fn test_other_whitespace_is_discarded() {
        assert_eq!(scan("  a\t\tb \r\n c  "), vec!["a", "b", "\n", "c"]);
        assert_eq!(scan("x\u{00A0}y\u{3000}z"), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_newline_between_spaces() {
        assert_eq!(scan("a \n b"), vec!["a", "\n", "b"]);
    }

    #[test]
    fn test_empty_and_blank_inputs() {
        assert!(scan("").is_empty());
        assert!(scan(" \t\r ").is_empty());
    }

    #[test]
    fn test_trailing_newline_is_kept() {
        assert_eq!(scan("42\n"), vec!["42", "\n"]);
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(scan("héllo wörld\n"), vec!["héllo", "wörld", "\n"]);
    }

    #[test]
    fn test_lazy_iteration_stops() {
        let mut lexemes = Lexemes::new("a\n");
        assert_eq!(lexemes.next(), Some("a"));
        assert_eq!(lexemes.next(), Some("\n"));
        assert_eq!(lexemes.next(), None);
        assert_eq!(lexemes.next(), None);
    }

    #[test]
    fn test_no_empty_lexemes() {
        let text = " \n\t 1.5\r\n\n -3 \u{2003}x \n";
        assert!(scan(text).iter().all(|xm| !xm.is_empty()));
    }
}
