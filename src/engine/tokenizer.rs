//! Word tokenizer shared by index building, stoplists and search terms.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Characters accepted as an apostrophe inside a word (`don't`, `o’clock`).
const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

/// Normalize a word to its index key: NFC composition, full Unicode case
/// folding, then NFC again.
///
/// Precomposed and decomposed spellings, as well as case variants
/// (`Straße`/`STRASSE`, `ﬁne`/`FINE`), collapse to the same key.
pub fn normalize(word: &str) -> String {
    let composed: String = word.nfc().collect();
    caseless::default_case_fold_str(&composed).nfc().collect()
}

/// Deterministic word tokenizer.
///
/// A word is a maximal run of alphabetic characters (combining marks
/// included). Apostrophes are kept when they sit between two letters.
/// Everything else, digits included, separates words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    keep_apostrophes: bool,
}

impl Tokenizer {
    /// Create a tokenizer that keeps word-internal apostrophes.
    pub fn new() -> Self {
        Self {
            keep_apostrophes: true,
        }
    }

    /// Create a tokenizer, choosing whether internal apostrophes join words.
    pub fn with_apostrophes(keep_apostrophes: bool) -> Self {
        Self { keep_apostrophes }
    }

    pub fn keeps_apostrophes(&self) -> bool {
        self.keep_apostrophes
    }

    /// Lazily tokenize `text` into normalized words.
    ///
    /// The returned iterator borrows `text`; call again to restart.
    pub fn tokenize<'a>(&self, text: &'a str) -> Tokens<'a> {
        Tokens {
            text,
            pos: 0,
            keep_apostrophes: self.keep_apostrophes,
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the normalized words of a text. Created by [`Tokenizer::tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    keep_apostrophes: bool,
}

impl Tokens<'_> {
    /// Byte offset one past the end of the word starting at `start`.
    fn word_end(&self, start: usize) -> usize {
        let mut chars = self.text[start..].char_indices().peekable();
        let mut end = start;

        while let Some((offset, c)) = chars.next() {
            let accept = if c.is_alphabetic() || is_combining_mark(c) {
                true
            } else if self.keep_apostrophes && APOSTROPHES.contains(&c) {
                matches!(chars.peek(), Some(&(_, next)) if next.is_alphabetic())
            } else {
                false
            };

            if !accept {
                break;
            }
            end = start + offset + c.len_utf8();
        }

        end
    }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let rest = &self.text[self.pos..];
        let Some((offset, _)) = rest.char_indices().find(|&(_, c)| c.is_alphabetic()) else {
            self.pos = self.text.len();
            return None;
        };

        let start = self.pos + offset;
        let end = self.word_end(start);
        self.pos = end;

        Some(normalize(&self.text[start..end]))
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
