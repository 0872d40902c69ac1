use crate::generator::DEFAULT_FILL_ALPHABET;
use crate::grid::Grid;
use crate::knight::format_path;
use crate::selector::WordMatch;
use crate::session::{SearchInterface, SearchReport, UserAction};
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;

/// Knight-move word search CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the grid file (defaults to the copy in the user data directory)
    #[arg(short = 'g', long = "grid", global = true)]
    pub grid_path: Option<PathBuf>,

    /// Write log output to this file instead of stderr
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    /// Give up on a word after this many search steps
    #[arg(long = "max-steps", global = true)]
    pub max_steps: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the longest word that can be traced on the grid
    Longest {
        /// Candidate words
        words: Vec<String>,
        /// Newline- or whitespace-delimited word list file
        #[arg(short = 'i', long = "input")]
        words_file: Option<PathBuf>,
        /// List every traceable word instead of only the longest
        #[arg(long)]
        all: bool,
    },
    /// Trace a single word through the grid
    Trace { word: String },
    /// Generate a grid containing the given words where possible
    Generate {
        words: Vec<String>,
        #[arg(short = 'i', long = "input")]
        words_file: Option<PathBuf>,
        /// Where to save the grid (defaults to the grid path)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
        /// Seed for reproducible grids
        #[arg(long)]
        seed: Option<u64>,
        /// Letters used for cells no word claimed
        #[arg(long, default_value = DEFAULT_FILL_ALPHABET)]
        alphabet: String,
    },
    /// Query the grid interactively
    Interactive {
        /// Use the full-screen terminal interface
        #[arg(long)]
        tui: bool,
    },
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Interpret one line of interactive input.
///
/// A lone `exit` or `grid` is a command. A leading `trace` searches the words
/// after it verbatim, so `trace exit` looks up the word "exit".
#[must_use]
pub fn parse_action(line: &str) -> Option<UserAction> {
    let words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    match words.as_slice() {
        [] => None,
        [only] if only.eq_ignore_ascii_case("exit") => Some(UserAction::Exit),
        [only] if only.eq_ignore_ascii_case("grid") => Some(UserAction::ShowGrid),
        [first, rest @ ..] if first.eq_ignore_ascii_case("trace") && !rest.is_empty() => {
            Some(UserAction::Search(rest.to_vec()))
        }
        _ => Some(UserAction::Search(words)),
    }
}

pub fn display_grid(grid: &Grid) {
    println!("Grid:");
    for row in grid.cells() {
        let line: Vec<String> = row.iter().map(char::to_string).collect();
        println!("  {}", line.join(" "));
    }
}

pub fn display_match(found: &WordMatch) {
    println!("{}: {}", found.word, format_path(&found.path));
}

pub fn display_no_match(words: &[String]) {
    if words.len() == 1 {
        println!("'{}' cannot be traced on this grid.", words[0]);
    } else {
        println!("None of the {} words can be traced on this grid.", words.len());
    }
}

pub fn display_report(report: &SearchReport) {
    match report {
        SearchReport::Found(found) => display_match(found),
        SearchReport::Missing { words } => display_no_match(words),
    }
}

pub fn display_exit_message() {
    println!("Exiting.");
}

fn read_action<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!(
        "\nEnter one or more words ('grid' to show the grid, 'exit' to quit, \
         'trace exit' to look up a reserved word):"
    );
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return Some(UserAction::Exit),
        Ok(_) => {}
    }

    let action = parse_action(&input);
    if action.is_none() {
        println!("Please enter at least one word.");
    }
    action
}

/// Line-oriented implementation of [`SearchInterface`] over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> SearchInterface for CliInterface<R> {
    fn display_grid(&mut self, grid: &Grid) {
        display_grid(grid);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        read_action(&mut self.reader)
    }

    fn display_report(&mut self, report: &SearchReport) {
        display_report(report);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
