//! Error types for the word list.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Cannot decode {origin} as UTF-8: {source}")]
    Decode {
        origin: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed word list at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown sort key: {0} (expected word, end or freq)")]
    UnknownSortKey(String),
}

pub type WordlistResult<T> = Result<T, WordlistError>;
