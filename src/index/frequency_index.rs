//! Frequency index mapping each normalized word to its occurrence count.

use std::collections::HashMap;

use crate::engine::tokenizer::{normalize, Tokenizer};
use crate::types::WordEntry;

/// Word counts for exactly one source text. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyIndex {
    /// word → number of occurrences (always > 0)
    counts: HashMap<String, u32>,
    /// Sum of all counts, i.e. the number of tokens indexed.
    total_tokens: u64,
}

impl FrequencyIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a token stream in a single pass.
    pub fn build<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut total_tokens: u64 = 0;

        for token in tokens {
            if token.is_empty() {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
            total_tokens += 1;
        }

        log::debug!(
            "built frequency index: {} tokens, {} distinct words",
            total_tokens,
            counts.len()
        );

        Self {
            counts,
            total_tokens,
        }
    }

    /// Tokenize `text` and build the index from the result.
    pub fn from_text(text: &str, tokenizer: &Tokenizer) -> Self {
        Self::build(tokenizer.tokenize(text))
    }

    /// Occurrences of `word` (normalized before lookup), 0 if absent.
    pub fn count(&self, word: &str) -> u32 {
        self.counts
            .get(word)
            .or_else(|| self.counts.get(&normalize(word)))
            .copied()
            .unwrap_or(0)
    }

    /// Whether `word` occurs in the indexed text.
    pub fn contains(&self, word: &str) -> bool {
        self.count(word) > 0
    }

    /// All (word, count) pairs in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// All entries as owned rows, in no particular order.
    pub fn to_entries(&self) -> Vec<WordEntry> {
        self.entries().map(WordEntry::from).collect()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens the index was built from.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }
}

impl FromIterator<String> for FrequencyIndex {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::build(iter)
    }
}
