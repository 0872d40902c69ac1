// Library interface for knight-search
// This allows integration tests to access internal modules

pub mod cli;
pub mod generator;
pub mod grid;
pub mod knight;
pub mod logging;
pub mod search;
pub mod selector;
pub mod session;
pub mod tui;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use generator::{GeneratedGrid, Placement, generate_grid, generate_grid_with_alphabet};
pub use grid::{Grid, GridError};
pub use knight::{Coord, GRID_SIZE, KNIGHT_MOVES, Path, format_path};
pub use search::SearchOutcome;
pub use selector::{WordMatch, find_all_words, find_longest_word, find_longest_word_limited};
pub use session::search_loop;
pub use wordlist::{load_words_from_file, load_words_from_str};
