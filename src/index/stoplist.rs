//! Stoplist: normalized words hidden from the word list.

use std::collections::HashSet;

use crate::engine::tokenizer::normalize;

/// Common English function words, offered as a ready-made stoplist.
const ENGLISH: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall", "can",
    "need", "must", "to", "of", "in", "for", "on", "with", "at", "by", "from", "as", "into",
    "about", "but", "not", "or", "and", "if", "it", "its", "this", "that", "which", "who", "what",
    "when", "where", "how", "all", "each", "both", "few", "more", "most", "other", "some", "such",
    "no", "than", "too", "very", "just", "also",
];

/// A case-insensitive set of excluded words.
///
/// Words are normalized on insertion and on lookup, so `"The"` and `"the"`
/// are the same entry. The stoplist never touches a [`FrequencyIndex`];
/// exclusion happens when a view is computed.
///
/// [`FrequencyIndex`]: crate::index::FrequencyIndex
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stoplist {
    words: HashSet<String>,
}

impl Stoplist {
    /// Create an empty stoplist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stoplist from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stoplist = Self::new();
        stoplist.extend(words);
        stoplist
    }

    /// The built-in English stoplist.
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// Check whether `word` is on the stoplist.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&normalize(word))
    }

    /// Lookup for a word that is already normalized (index keys are).
    pub(crate) fn contains_normalized(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Add a word. Returns `false` if it was already present or is blank.
    pub fn add(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(normalize(word))
    }

    /// Remove a word. Returns `true` if it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(&normalize(word.trim()))
    }

    /// Replace the whole stoplist.
    pub fn replace<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.clear();
        self.extend(words);
    }

    /// Remove every word.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Number of words on the stoplist.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in ascending order.
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> Extend<S> for Stoplist {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Stoplist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
