//! Tokenizing, view computation and the engine facade.

pub mod sorted_view;
pub mod tokenizer;
pub mod wordlist;

pub use sorted_view::SortedView;
pub use tokenizer::{normalize, Tokenizer, Tokens};
pub use wordlist::WordlistEngine;
