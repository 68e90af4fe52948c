//! Example: an interactive custom dictionary on top of PrefixTree.
//!
//! Reads one command per line from stdin:
//!
//! ```text
//! add <word>          add a word to the dictionary
//! check <word>        print whether the word is in the dictionary
//! complete <prefix>   print every word starting with the prefix, one per line
//! quit                exit
//! ```
//!
//! Run with: cargo run --example dictionary -- [--words FILE] [--sorted]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use libtrie::trie::PrefixTree;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Interactive word lookup and prefix completion.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Word list to load before reading commands, one word per line.
    #[arg(short, long)]
    words: Option<PathBuf>,
    /// Print completions in alphabetical order.
    #[arg(short, long)]
    sorted: bool,
}

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Add(&'a str),
    Check(&'a str),
    Complete(&'a str),
    Quit,
}

fn parse(line: &str) -> Option<Command<'_>> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    let arg = parts.next();
    if parts.next().is_some() {
        return None;
    }
    match (command, arg) {
        ("add", Some(word)) => Some(Command::Add(word)),
        ("check", Some(word)) => Some(Command::Check(word)),
        // A bare `complete` lists everything.
        ("complete", prefix) => Some(Command::Complete(prefix.unwrap_or(""))),
        ("quit", None) => Some(Command::Quit),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut dictionary = match &args.words {
        Some(path) => PrefixTree::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PrefixTree::new(),
    };
    info!(words = dictionary.len(), "dictionary ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse(&line) {
            Some(Command::Add(word)) => {
                let added = dictionary.insert(word);
                debug!(word, added, "add");
            }
            Some(Command::Check(word)) => {
                writeln!(stdout, "{}", dictionary.contains(word))?;
            }
            Some(Command::Complete(prefix)) => {
                let mut found = dictionary.completions(prefix);
                if args.sorted {
                    found.sort();
                }
                for word in found {
                    writeln!(stdout, "{word}")?;
                }
            }
            Some(Command::Quit) => break,
            None if line.trim().is_empty() => {}
            None => writeln!(stdout, "usage: add <word> | check <word> | complete <prefix> | quit")?,
        }
    }
    Ok(())
}
