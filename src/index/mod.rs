//! Index structures built from a loaded text, and the stoplist applied to them.

pub mod frequency_index;
pub mod stoplist;

pub use frequency_index::FrequencyIndex;
pub use stoplist::Stoplist;
