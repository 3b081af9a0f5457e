//! Reading source texts from disk.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::types::{WordlistError, WordlistResult};

const BOM: char = '\u{feff}';

/// Read a whole file and decode it as UTF-8. A leading byte-order mark is dropped.
pub fn read_text(path: &Path) -> WordlistResult<String> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(String::new());
    }

    // SAFETY: the map is read-only and dropped before this function returns;
    // the bytes are copied out once decoded.
    let mmap = unsafe { Mmap::map(&file)? };
    decode_text(&mmap, &path.display().to_string())
}

/// Decode `bytes` as UTF-8, naming `origin` in the error.
pub fn decode_text(bytes: &[u8], origin: &str) -> WordlistResult<String> {
    let text = std::str::from_utf8(bytes).map_err(|source| WordlistError::Decode {
        origin: origin.to_string(),
        source,
    })?;
    Ok(text.strip_prefix(BOM).unwrap_or(text).to_string())
}
