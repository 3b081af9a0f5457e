//! Word frequency lists from plain text.
//!
//! A loaded text is tokenized into normalized words and counted once. The
//! resulting list can be viewed sorted by word, by word ending (rhyme
//! order) or by frequency, with stoplisted words hidden and an optional
//! substring search applied.
//!
//! ```
//! use wordlist::{SortKey, WordEntry, WordlistEngine};
//!
//! let mut engine = WordlistEngine::new();
//! engine.load("the cat sat on the mat");
//! engine.stoplist_mut().replace(["the", "on"]);
//! engine.set_sort_key(SortKey::ByFrequency);
//!
//! let rows = engine.view();
//! assert_eq!(
//!     rows,
//!     vec![
//!         WordEntry::new("cat", 1),
//!         WordEntry::new("mat", 1),
//!         WordEntry::new("sat", 1),
//!     ]
//! );
//! ```

pub mod config;
pub mod engine;
pub mod index;
pub mod types;

#[cfg(feature = "format")]
pub mod format;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use engine::{normalize, SortedView, Tokenizer, Tokens, WordlistEngine};
pub use index::{FrequencyIndex, Stoplist};
pub use types::{SortKey, WordEntry, WordlistError, WordlistResult};
