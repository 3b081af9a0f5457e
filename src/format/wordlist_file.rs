//! The `word<TAB>count` word list format.

use std::io::{self, Write};
use std::path::Path;

use crate::types::{WordEntry, WordlistError, WordlistResult};

/// Write rows as `word\tcount\n` lines, in the given order.
pub fn write_entries<W: Write>(writer: &mut W, entries: &[WordEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(writer, "{}\t{}", entry.word, entry.count)?;
    }
    Ok(())
}

/// Save rows to `path` in the given order.
pub fn save_wordlist(path: &Path, entries: &[WordEntry]) -> WordlistResult<()> {
    super::write_atomically(path, |writer| write_entries(writer, entries))
}

/// Parse `word\tcount` lines. Blank lines are skipped.
pub fn parse_wordlist(content: &str) -> WordlistResult<Vec<WordEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (word, count) = line.split_once('\t').ok_or_else(|| WordlistError::Parse {
            line: idx + 1,
            reason: "missing tab separator".to_string(),
        })?;
        if word.is_empty() {
            return Err(WordlistError::Parse {
                line: idx + 1,
                reason: "empty word".to_string(),
            });
        }
        let count: u32 = count.trim().parse().map_err(|e| WordlistError::Parse {
            line: idx + 1,
            reason: format!("invalid count {:?}: {}", count, e),
        })?;

        entries.push(WordEntry::new(word, count));
    }

    Ok(entries)
}

/// Read a saved word list back, keeping the saved order.
pub fn load_wordlist(path: &Path) -> WordlistResult<Vec<WordEntry>> {
    let content = super::read_text(path)?;
    parse_wordlist(&content)
}
