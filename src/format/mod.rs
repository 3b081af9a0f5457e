//! Flat file formats: source texts, saved word lists and stoplists.
//!
//! - source texts are read whole and decoded as UTF-8,
//! - word lists are `word<TAB>count` lines in view order,
//! - stoplists are one word per line with `#` comments.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::types::WordlistResult;

mod stoplist_file;
mod text;
mod wordlist_file;

pub use stoplist_file::{load_stoplist, parse_stoplist, save_stoplist};
pub use text::{decode_text, read_text};
pub use wordlist_file::{load_wordlist, parse_wordlist, save_wordlist, write_entries};

/// Write `path` through a temporary sibling renamed into place. Readers never
/// observe a partially written file.
fn write_atomically<F>(path: &Path, write: F) -> WordlistResult<()>
where
    F: FnOnce(&mut BufWriter<&fs::File>) -> io::Result<()>,
{
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let temp_file = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        write(&mut writer)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
