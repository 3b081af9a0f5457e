//! The word list engine: the facade a front end drives.

use crate::engine::sorted_view::SortedView;
use crate::engine::tokenizer::Tokenizer;
use crate::index::{FrequencyIndex, Stoplist};
use crate::types::{SortKey, WordEntry, WordlistError, WordlistResult};

#[cfg(feature = "format")]
use std::path::Path;

/// Text loaded into the engine together with the index built from it.
#[derive(Debug, Clone)]
struct LoadedText {
    text: String,
    index: FrequencyIndex,
}

/// Owns the current frequency index, the stoplist and the view settings.
///
/// The engine is either Empty (nothing loaded) or Loaded. [`load`] builds a
/// complete new index before swapping it in, so a view never sees a partial
/// index. The engine is single-threaded; share it behind a `Mutex` if
/// several threads need it.
///
/// [`load`]: WordlistEngine::load
#[derive(Debug, Clone, Default)]
pub struct WordlistEngine {
    tokenizer: Tokenizer,
    loaded: Option<LoadedText>,
    stoplist: Stoplist,
    sort_key: SortKey,
    default_sort: SortKey,
    search: Option<String>,
}

impl WordlistEngine {
    /// Create an empty engine sorting by word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific tokenizer for subsequent loads.
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set the sort key applied whenever a text is loaded.
    pub fn with_default_sort(mut self, key: SortKey) -> Self {
        self.default_sort = key;
        self.sort_key = key;
        self
    }

    /// Start with the given stoplist.
    pub fn with_stoplist(mut self, stoplist: Stoplist) -> Self {
        self.stoplist = stoplist;
        self
    }

    /// Load a decoded text, replacing any previous one.
    ///
    /// The sort key returns to the default. The stoplist and the search term
    /// are kept.
    pub fn load(&mut self, text: impl Into<String>) {
        let text = text.into();
        let index = FrequencyIndex::from_text(&text, &self.tokenizer);
        self.loaded = Some(LoadedText { text, index });
        self.sort_key = self.default_sort;
    }

    /// Decode `bytes` as UTF-8 and load the result.
    ///
    /// On a decode error the engine keeps its current state.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> WordlistResult<()> {
        let text = std::str::from_utf8(bytes).map_err(|source| WordlistError::Decode {
            origin: "<memory>".to_string(),
            source,
        })?;
        self.load(text);
        Ok(())
    }

    /// Read a UTF-8 text file and load it.
    ///
    /// On any error the engine keeps its current state.
    #[cfg(feature = "format")]
    pub fn load_file(&mut self, path: &Path) -> WordlistResult<()> {
        let text = crate::format::read_text(path)?;
        self.load(text);
        log::info!(
            "loaded {}: {} tokens, {} distinct words",
            path.display(),
            self.total_tokens(),
            self.index().map_or(0, FrequencyIndex::len)
        );
        Ok(())
    }

    /// Save the current view as `word<TAB>count` lines.
    ///
    /// Stoplisted and search-filtered words are not written: the file holds
    /// exactly what [`view`](Self::view) returns.
    #[cfg(feature = "format")]
    pub fn save(&self, path: &Path) -> WordlistResult<()> {
        let rows = self.view();
        crate::format::save_wordlist(path, &rows)?;
        log::info!("saved {} rows to {}", rows.len(), path.display());
        Ok(())
    }

    /// Return to the Empty state.
    ///
    /// Drops the text and index, clears the search term and the stoplist and
    /// restores the default sort key.
    pub fn reset(&mut self) {
        self.loaded = None;
        self.stoplist.clear();
        self.search = None;
        self.sort_key = self.default_sort;
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn default_sort(&self) -> SortKey {
        self.default_sort
    }

    /// Set or clear the search term. Blank terms clear it.
    pub fn set_search(&mut self, term: Option<&str>) {
        self.search = term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
    }

    pub fn clear_search(&mut self) {
        self.search = None;
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// The ordered rows for the current state. Empty when nothing is loaded.
    pub fn view(&self) -> Vec<WordEntry> {
        match &self.loaded {
            Some(loaded) => SortedView::compute(
                &loaded.index,
                &self.stoplist,
                self.sort_key,
                self.search.as_deref(),
            ),
            None => Vec::new(),
        }
    }

    /// Row of the current view after `after` whose word contains `term`.
    pub fn find_next(&self, term: &str, after: Option<usize>) -> Option<usize> {
        SortedView::find_next(&self.view(), term, after)
    }

    pub fn stoplist(&self) -> &Stoplist {
        &self.stoplist
    }

    /// Mutable access for stoplist editing. Takes effect on the next view.
    pub fn stoplist_mut(&mut self) -> &mut Stoplist {
        &mut self.stoplist
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// The loaded text, kept for re-display.
    pub fn text(&self) -> Option<&str> {
        self.loaded.as_ref().map(|l| l.text.as_str())
    }

    pub fn index(&self) -> Option<&FrequencyIndex> {
        self.loaded.as_ref().map(|l| &l.index)
    }

    /// Tokens in the loaded text, 0 when Empty.
    pub fn total_tokens(&self) -> u64 {
        self.index().map_or(0, FrequencyIndex::total_tokens)
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}
