use knight_search::cli::{
    CliInterface, Command, display_grid, display_match, display_no_match, parse_cli,
};
use knight_search::generator::generate_grid_with_alphabet;
use knight_search::logging::init_logging;
use knight_search::search::SearchOutcome;
use knight_search::selector::{WordMatch, find_all_words, find_longest_word_limited};
use knight_search::session::search_loop;
use knight_search::tui::TuiInterface;
use knight_search::wordlist::{
    EMBEDDED_WORDLIST, default_grid_path, load_words_from_file, load_words_from_str,
};
use knight_search::{Grid, debug_log};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    let Some(grid_path) = cli.grid_path.clone().or_else(default_grid_path) else {
        eprintln!("No data directory available; pass --grid to choose a grid file.");
        return ExitCode::FAILURE;
    };
    debug_log!("Using grid file {}", grid_path.display());

    match cli.command {
        Command::Longest {
            words,
            words_file,
            all,
        } => run_longest(&grid_path, words, words_file, all, cli.max_steps),
        Command::Trace { word } => run_trace(&grid_path, &word, cli.max_steps),
        Command::Generate {
            words,
            words_file,
            output,
            seed,
            alphabet,
        } => {
            let output = output.unwrap_or(grid_path);
            run_generate(&output, words, words_file, seed, &alphabet)
        }
        Command::Interactive { tui } => run_interactive(&grid_path, tui, cli.max_steps),
    }
}

fn load_grid(path: &Path) -> Option<Grid> {
    match Grid::load(path) {
        Ok(grid) => Some(grid),
        Err(e) => {
            eprintln!("Failed to load grid from '{}': {e}", path.display());
            None
        }
    }
}

fn collect_words(mut words: Vec<String>, words_file: Option<PathBuf>) -> Option<Vec<String>> {
    if let Some(path) = words_file {
        match load_words_from_file(&path) {
            Ok(loaded) => words.extend(loaded),
            Err(e) => {
                eprintln!("Failed to load word list from '{}': {e}", path.display());
                return None;
            }
        }
    }
    Some(words)
}

fn run_longest(
    grid_path: &Path,
    words: Vec<String>,
    words_file: Option<PathBuf>,
    all: bool,
    max_steps: Option<usize>,
) -> ExitCode {
    let Some(grid) = load_grid(grid_path) else {
        return ExitCode::FAILURE;
    };
    let Some(mut words) = collect_words(words, words_file) else {
        return ExitCode::FAILURE;
    };
    if words.is_empty() {
        words = load_words_from_str(EMBEDDED_WORDLIST);
        println!("Using the built-in word list ({} words).", words.len());
    }

    if all {
        let matches = find_all_words(&grid, &words, max_steps);
        println!("Traceable words ({}):", matches.len());
        for found in &matches {
            display_match(found);
        }
    } else {
        match find_longest_word_limited(&grid, &words, max_steps) {
            Some(found) => display_match(&found),
            None => display_no_match(&words),
        }
    }
    ExitCode::SUCCESS
}

fn run_trace(grid_path: &Path, word: &str, max_steps: Option<usize>) -> ExitCode {
    let Some(grid) = load_grid(grid_path) else {
        return ExitCode::FAILURE;
    };
    match grid.search(word, max_steps) {
        SearchOutcome::Found(path) => display_match(&WordMatch {
            word: word.to_string(),
            path,
        }),
        SearchOutcome::NotFound => display_no_match(&[word.to_string()]),
        SearchOutcome::Abandoned { steps } => {
            println!("Gave up on '{word}' after {steps} search steps.");
        }
    }
    ExitCode::SUCCESS
}

fn run_generate(
    output: &Path,
    words: Vec<String>,
    words_file: Option<PathBuf>,
    seed: Option<u64>,
    alphabet: &str,
) -> ExitCode {
    let Some(words) = collect_words(words, words_file) else {
        return ExitCode::FAILURE;
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generated = generate_grid_with_alphabet(&words, alphabet, &mut rng);
    if let Err(e) = generated.grid.save(output) {
        eprintln!("Failed to save grid to '{}': {e}", output.display());
        return ExitCode::FAILURE;
    }

    display_grid(&generated.grid);
    println!("Saved to {}.", output.display());
    let shortfalls = generated.shortfalls();
    if !shortfalls.is_empty() {
        println!("Words only partly placed:");
        for (word, placement) in shortfalls {
            println!(
                "  {word}: {}/{} letters ('{}')",
                placement.path.len(),
                placement.target_len,
                placement.placed
            );
        }
    }
    ExitCode::SUCCESS
}

fn run_interactive(grid_path: &Path, tui: bool, max_steps: Option<usize>) -> ExitCode {
    let Some(grid) = load_grid(grid_path) else {
        return ExitCode::FAILURE;
    };

    if tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        };
        search_loop(&grid, &mut interface, max_steps);
    } else {
        let mut interface = CliInterface::new(io::stdin().lock());
        search_loop(&grid, &mut interface, max_steps);
    }
    ExitCode::SUCCESS
}
