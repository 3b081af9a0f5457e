//! Shared value types: sort keys, view rows and the crate error.

pub mod error;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use error::{WordlistError, WordlistResult};

/// Ordering applied to the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Ascending lexical order of the word.
    #[default]
    #[serde(rename = "word", alias = "start")]
    ByWordStart,
    /// Ascending lexical order of the word read backwards (rhyme order).
    #[serde(rename = "end", alias = "ending")]
    ByWordEnd,
    /// Descending count, ties broken by ascending word.
    #[serde(rename = "freq", alias = "frequency")]
    ByFrequency,
}

impl SortKey {
    /// All sort keys in menu order.
    pub const ALL: [SortKey; 3] = [SortKey::ByWordStart, SortKey::ByWordEnd, SortKey::ByFrequency];

    /// Short name used on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            SortKey::ByWordStart => "word",
            SortKey::ByWordEnd => "end",
            SortKey::ByFrequency => "freq",
        }
    }

    /// Parse a sort key from its name or one of its aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "word" | "start" => Some(SortKey::ByWordStart),
            "end" | "ending" => Some(SortKey::ByWordEnd),
            "freq" | "frequency" => Some(SortKey::ByFrequency),
            _ => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| WordlistError::UnknownSortKey(s.to_string()))
    }
}

/// One row of the word list: a normalized word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub count: u32,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl From<(&str, u32)> for WordEntry {
    fn from((word, count): (&str, u32)) -> Self {
        Self::new(word, count)
    }
}
