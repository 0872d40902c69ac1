use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/words.txt");

const APP_DIR: &str = "knight-search";
const GRID_FILE: &str = "grid.txt";

/// Split text into candidate words: any whitespace separates words.
pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.split_whitespace().map(str::to_string).collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        words.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(words)
}

/// Where the grid lives when no `--grid` path is given.
pub fn default_grid_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(GRID_FILE))
}
