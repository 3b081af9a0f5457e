//! `wordlist` command-line tool.

fn main() {
    if let Err(e) = wordlist::cli::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
