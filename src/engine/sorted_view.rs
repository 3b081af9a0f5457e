//! Sorted, filtered projection of a frequency index.

use std::cmp::Ordering;

use crate::engine::tokenizer::normalize;
use crate::index::{FrequencyIndex, Stoplist};
use crate::types::{SortKey, WordEntry};

/// Stateless view computation over an index, a stoplist, a sort key and an
/// optional search term. Every call materializes a fresh sequence.
pub struct SortedView;

impl SortedView {
    /// Compute the ordered rows of the word list.
    ///
    /// Stoplisted words are dropped, then (if `search` is non-empty) every
    /// word not containing the normalized search term as a substring, then
    /// the remainder is sorted by `key`.
    pub fn compute(
        index: &FrequencyIndex,
        stoplist: &Stoplist,
        key: SortKey,
        search: Option<&str>,
    ) -> Vec<WordEntry> {
        let needle = search.map(|term| normalize(term.trim())).filter(|t| !t.is_empty());

        let mut rows: Vec<WordEntry> = index
            .entries()
            .filter(|(word, _)| !stoplist.contains_normalized(word))
            .filter(|(word, _)| needle.as_deref().map_or(true, |n| word.contains(n)))
            .map(WordEntry::from)
            .collect();

        Self::sort(&mut rows, key);

        log::debug!(
            "computed view: {} of {} words, sort={}, search={:?}",
            rows.len(),
            index.len(),
            key,
            needle
        );

        rows
    }

    /// Sort rows in place by `key`.
    pub fn sort(rows: &mut [WordEntry], key: SortKey) {
        match key {
            SortKey::ByWordStart => rows.sort_unstable_by(|a, b| a.word.cmp(&b.word)),
            // Compare on a reversed copy; the stored word stays as displayed.
            SortKey::ByWordEnd => rows.sort_by_cached_key(|e| reversed(&e.word)),
            SortKey::ByFrequency => rows.sort_unstable_by(by_frequency),
        }
    }

    /// Position of the next row after `after` whose word contains `term`.
    ///
    /// The search wraps around to the top of the list; with `after == None`
    /// it starts at the first row. Returns `None` when no row matches or the
    /// term is blank.
    pub fn find_next(rows: &[WordEntry], term: &str, after: Option<usize>) -> Option<usize> {
        let needle = normalize(term.trim());
        if needle.is_empty() || rows.is_empty() {
            return None;
        }

        let start = after.map_or(0, |pos| (pos + 1) % rows.len());
        (0..rows.len())
            .map(|step| (start + step) % rows.len())
            .find(|&pos| rows[pos].word.contains(needle.as_str()))
    }
}

fn reversed(word: &str) -> String {
    word.chars().rev().collect()
}

fn by_frequency(a: &WordEntry, b: &WordEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}
