//! Command-line front end.

pub mod shell;

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::Config;
use crate::engine::WordlistEngine;
use crate::format;
use crate::types::{SortKey, WordlistResult};

#[derive(Debug, Parser)]
#[command(name = "wordlist", version, about = "Word frequency lists from plain text")]
pub struct Cli {
    /// Configuration file (default: <config dir>/wordlist/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the word list of a text file
    List(ListArgs),
    /// Print token and word counts of a text file
    Stats {
        file: PathBuf,
    },
    /// Browse a word list interactively
    Shell {
        file: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// UTF-8 text file
    pub file: PathBuf,

    /// Sort order: word, end or freq
    #[arg(short, long)]
    pub sort: Option<SortKey>,

    /// Stoplist file, one word per line
    #[arg(long)]
    pub stoplist: Option<PathBuf>,

    /// Only show words containing this term
    #[arg(long)]
    pub search: Option<String>,

    /// Print a JSON array instead of tab-separated lines
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Save the list to a file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parse arguments, set up logging and run the chosen command.
pub fn run() -> WordlistResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::discover(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::List(args) => list(&config, &args, &mut out)?,
        Command::Stats { file } => stats(&config, &file, &mut out)?,
        Command::Shell { file } => {
            out.flush()?;
            drop(out);
            return shell::run_interactive(config.build_engine()?, file.as_deref());
        }
        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "wordlist", &mut out);
        }
    }

    out.flush()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}

/// `wordlist list`: load, view and print or save.
pub fn list<W: Write>(config: &Config, args: &ListArgs, out: &mut W) -> WordlistResult<()> {
    let mut engine = config.build_engine()?;
    if let Some(path) = &args.stoplist {
        let stoplist = format::load_stoplist(path, engine.tokenizer())?;
        *engine.stoplist_mut() = stoplist;
    }

    engine.load_file(&args.file)?;
    if let Some(key) = args.sort {
        engine.set_sort_key(key);
    }
    engine.set_search(args.search.as_deref());

    if let Some(path) = &args.output {
        return engine.save(path);
    }

    let rows = engine.view();
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &rows).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        format::write_entries(out, &rows)?;
    }
    Ok(())
}

/// `wordlist stats`: token and distinct word counts.
pub fn stats<W: Write>(config: &Config, file: &Path, out: &mut W) -> WordlistResult<()> {
    let mut engine = config.build_engine()?;
    engine.load_file(file)?;
    write_stats(&engine, out)?;
    Ok(())
}

pub(crate) fn write_stats<W: Write>(engine: &WordlistEngine, out: &mut W) -> io::Result<()> {
    let words = engine.index().map_or(0, |index| index.len());
    writeln!(out, "tokens:\t{}", engine.total_tokens())?;
    writeln!(out, "words:\t{}", words)?;
    writeln!(out, "shown:\t{}", engine.view().len())?;
    Ok(())
}
