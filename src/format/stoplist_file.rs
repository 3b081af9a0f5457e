//! Stoplist files: one word per line, `#` starts a comment.

use std::io::Write;
use std::path::Path;

use crate::engine::tokenizer::Tokenizer;
use crate::index::Stoplist;
use crate::types::WordlistResult;

/// Parse a stoplist. Every word on a line is added, normalized the same way
/// as the text being indexed.
pub fn parse_stoplist(content: &str, tokenizer: &Tokenizer) -> Stoplist {
    let mut stoplist = Stoplist::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        if line.trim().is_empty() {
            continue;
        }

        let mut found = false;
        for word in tokenizer.tokenize(line) {
            found = true;
            stoplist.add(&word);
        }
        if !found {
            log::warn!("stoplist line {} has no words: {:?}", idx + 1, line.trim());
        }
    }

    stoplist
}

/// Read a stoplist file.
pub fn load_stoplist(path: &Path, tokenizer: &Tokenizer) -> WordlistResult<Stoplist> {
    let content = super::read_text(path)?;
    let stoplist = parse_stoplist(&content, tokenizer);
    log::info!("read {} stoplist words from {}", stoplist.len(), path.display());
    Ok(stoplist)
}

/// Write a stoplist, one word per line in ascending order.
pub fn save_stoplist(path: &Path, stoplist: &Stoplist) -> WordlistResult<()> {
    super::write_atomically(path, |writer| {
        for word in stoplist.sorted_words() {
            writeln!(writer, "{}", word)?;
        }
        Ok(())
    })
}
