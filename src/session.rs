use crate::grid::Grid;
use crate::info_log;
use crate::selector::{WordMatch, find_longest_word_limited};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// One word is traced; several pick the longest traceable one.
    Search(Vec<String>),
    ShowGrid,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchReport {
    Found(WordMatch),
    Missing { words: Vec<String> },
}

/// Front end for the interactive loop (line-oriented CLI or terminal UI).
pub trait SearchInterface {
    fn display_grid(&mut self, grid: &Grid);
    /// `None` means the input was rejected and the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_report(&mut self, report: &SearchReport);
    fn display_exit_message(&mut self);
}

#[must_use]
pub fn run_query(grid: &Grid, words: &[String], max_steps: Option<usize>) -> SearchReport {
    match find_longest_word_limited(grid, words, max_steps) {
        Some(found) => SearchReport::Found(found),
        None => SearchReport::Missing {
            words: words.to_vec(),
        },
    }
}

pub fn search_loop<I: SearchInterface + ?Sized>(
    grid: &Grid,
    interface: &mut I,
    max_steps: Option<usize>,
) {
    interface.display_grid(grid);

    loop {
        let words = match interface.read_action() {
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                break;
            }
            Some(UserAction::ShowGrid) => {
                interface.display_grid(grid);
                continue;
            }
            Some(UserAction::Search(words)) => words,
            None => continue,
        };

        info_log!("search_loop() - querying {:?}", words);
        let report = run_query(grid, &words, max_steps);
        interface.display_report(&report);
    }
}
