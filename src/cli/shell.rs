//! Interactive word list browser.
//!
//! Each line is one command; see [`HELP`]. Command errors are printed and
//! the session carries on.

use std::io::{self, Write};
use std::path::Path;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::engine::WordlistEngine;
use crate::format;
use crate::index::Stoplist;
use crate::types::{SortKey, WordlistResult};

const PROMPT: &str = "wordlist> ";
const DEFAULT_SHOW: usize = 20;

pub const HELP: &str = "\
commands:
  open <file>            load a text file
  close                  unload the text and clear the stoplist
  sort [word|end|freq]   show or change the sort order
  filter [term]          only show words containing term (no term: show all)
  find <term>            jump to the first word containing term
  next                   jump to the next match of the last find
  show [n|all]           print the first n rows (default 20)
  text                   print the loaded text
  stats                  token and word counts
  save <file>            save the shown rows as word<TAB>count lines
  stop list              print the stoplist
  stop add <words>       add words to the stoplist
  stop remove <words>    remove words from the stoplist
  stop clear             empty the stoplist
  stop english           use the built-in English stoplist
  stop load <file>       replace the stoplist from a file
  stop save <file>       write the stoplist to a file
  help                   this text
  quit                   leave";

/// Interactive state: the engine plus the find cursor.
pub struct Session {
    engine: WordlistEngine,
    find_term: Option<String>,
    cursor: Option<usize>,
}

impl Session {
    pub fn new(engine: WordlistEngine) -> Self {
        Self {
            engine,
            find_term: None,
            cursor: None,
        }
    }

    pub fn engine(&self) -> &WordlistEngine {
        &self.engine
    }

    /// Row selected by the last `find`/`next`.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Run one command line. Returns `Ok(false)` once the session should end.
    ///
    /// Only failures writing to `out` are returned; command failures are
    /// reported on `out`.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(true);
        };
        let args: Vec<&str> = parts.collect();

        match self.dispatch(command, &args, out) {
            Ok(keep_going) => Ok(keep_going),
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                Ok(true)
            }
        }
    }

    fn dispatch<W: Write>(
        &mut self,
        command: &str,
        args: &[&str],
        out: &mut W,
    ) -> WordlistResult<bool> {
        match command {
            "quit" | "exit" | "q" => return Ok(false),
            "help" | "?" => writeln!(out, "{}", HELP)?,
            "open" => self.open(&require_path(args)?, out)?,
            "close" => {
                self.engine.reset();
                self.clear_find();
                writeln!(out, "closed")?;
            }
            "sort" => self.sort(args, out)?,
            "filter" => {
                let term = args.join(" ");
                self.engine.set_search(Some(&term));
                self.clear_find();
                writeln!(out, "{} words shown", self.engine.view().len())?;
            }
            "find" => {
                let term = args.join(" ");
                self.cursor = None;
                self.find_term = Some(term);
                self.find(out)?;
            }
            "next" | "n" => self.find(out)?,
            "show" => self.show(args, out)?,
            "text" => match self.engine.text() {
                Some(text) => writeln!(out, "{}", text)?,
                None => writeln!(out, "no text loaded")?,
            },
            "stats" => super::write_stats(&self.engine, out)?,
            "save" => {
                let path = require_path(args)?;
                self.engine.save(Path::new(&path))?;
                writeln!(out, "saved {} rows to {}", self.engine.view().len(), path)?;
            }
            "stop" => self.stoplist(args, out)?,
            other => writeln!(out, "unknown command {:?}, try help", other)?,
        }
        Ok(true)
    }

    /// Load a file into the engine and report its size.
    pub fn open<W: Write>(&mut self, path: &str, out: &mut W) -> WordlistResult<()> {
        self.engine.load_file(Path::new(path))?;
        self.clear_find();
        let words = self.engine.index().map_or(0, |index| index.len());
        writeln!(
            out,
            "read {}: {} tokens, {} words",
            path,
            self.engine.total_tokens(),
            words
        )?;
        Ok(())
    }

    fn sort<W: Write>(&mut self, args: &[&str], out: &mut W) -> WordlistResult<()> {
        if let Some(name) = args.first() {
            let key: SortKey = name.parse()?;
            self.engine.set_sort_key(key);
            self.clear_find();
        }
        writeln!(out, "sorted by {}", self.engine.sort_key())?;
        Ok(())
    }

    fn find<W: Write>(&mut self, out: &mut W) -> WordlistResult<()> {
        let Some(term) = self.find_term.as_deref() else {
            writeln!(out, "nothing to find, use find <term>")?;
            return Ok(());
        };

        let rows = self.engine.view();
        match crate::engine::SortedView::find_next(&rows, term, self.cursor) {
            Some(pos) => {
                let row = &rows[pos];
                writeln!(out, "{:>6}  {}\t{}", pos + 1, row.word, row.count)?;
                self.cursor = Some(pos);
            }
            None => writeln!(out, "{:?} not found", term)?,
        }
        Ok(())
    }

    fn show<W: Write>(&self, args: &[&str], out: &mut W) -> WordlistResult<()> {
        let rows = self.engine.view();
        let limit = match args.first() {
            None => DEFAULT_SHOW,
            Some(&"all") => rows.len(),
            Some(n) => n.parse().unwrap_or(DEFAULT_SHOW),
        };

        for (pos, row) in rows.iter().enumerate().take(limit) {
            writeln!(out, "{:>6}  {}\t{}", pos + 1, row.word, row.count)?;
        }
        if rows.len() > limit {
            writeln!(out, "... {} more", rows.len() - limit)?;
        }
        Ok(())
    }

    fn stoplist<W: Write>(&mut self, args: &[&str], out: &mut W) -> WordlistResult<()> {
        let (action, words) = args.split_first().map_or(("list", &[][..]), |(a, w)| (*a, w));

        match action {
            "list" => {
                for word in self.engine.stoplist().sorted_words() {
                    writeln!(out, "{}", word)?;
                }
            }
            "add" => {
                let mut added = 0;
                for word in words {
                    if self.engine.stoplist_mut().add(word) {
                        added += 1;
                    }
                }
                writeln!(out, "added {} words", added)?;
            }
            "remove" | "rm" => {
                let mut removed = 0;
                for word in words {
                    if self.engine.stoplist_mut().remove(word) {
                        removed += 1;
                    }
                }
                writeln!(out, "removed {} words", removed)?;
            }
            "clear" => {
                self.engine.stoplist_mut().clear();
                writeln!(out, "stoplist cleared")?;
            }
            "english" => {
                *self.engine.stoplist_mut() = Stoplist::english();
                writeln!(out, "{} stoplist words", self.engine.stoplist().len())?;
            }
            "load" => {
                let path = require_path(words)?;
                let stoplist = format::load_stoplist(Path::new(&path), self.engine.tokenizer())?;
                *self.engine.stoplist_mut() = stoplist;
                writeln!(out, "{} stoplist words", self.engine.stoplist().len())?;
            }
            "save" => {
                let path = require_path(words)?;
                format::save_stoplist(Path::new(&path), self.engine.stoplist())?;
                writeln!(out, "saved {} stoplist words", self.engine.stoplist().len())?;
            }
            other => writeln!(out, "unknown stoplist action {:?}, try help", other)?,
        }
        self.clear_find();
        Ok(())
    }

    fn clear_find(&mut self) {
        self.cursor = None;
    }
}

fn require_path(args: &[&str]) -> WordlistResult<String> {
    if args.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "missing file name").into());
    }
    Ok(args.join(" "))
}

/// Read commands from the terminal until `quit` or end of input.
pub fn run_interactive(engine: WordlistEngine, file: Option<&Path>) -> WordlistResult<()> {
    let mut session = Session::new(engine);
    let mut out = io::stdout();

    if let Some(path) = file {
        if let Err(e) = session.open(&path.to_string_lossy(), &mut out) {
            writeln!(out, "error: {}", e)?;
        }
    }

    let mut editor = DefaultEditor::new().map_err(io::Error::other)?;
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                if !session.execute_line(&line, &mut out)? {
                    break;
                }
                out.flush()?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(io::Error::other(e).into()),
        }
    }

    Ok(())
}
