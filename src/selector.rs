use crate::grid::{Grid, fold_case};
use crate::info_log;
use crate::knight::Path;
use crate::search::SearchOutcome;
use std::cmp::Reverse;

/// A word together with the path that traces it on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub word: String,
    pub path: Path,
}

/// Non-empty words ordered longest first, then alphabetically.
///
/// Length and alphabetical order are taken on the case-folded word, with the
/// original spelling as the final tie-break. The input slice is not touched.
#[must_use]
pub fn search_order<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    let mut ordered: Vec<&str> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| !word.is_empty())
        .collect();
    ordered.sort_by_cached_key(|word| {
        let folded = fold_case(word);
        (Reverse(folded.chars().count()), folded, word.to_string())
    });
    ordered
}

/// The longest word with a path on the grid, alphabetically earliest among
/// equal lengths.
#[must_use]
pub fn find_longest_word<S: AsRef<str>>(grid: &Grid, words: &[S]) -> Option<WordMatch> {
    find_longest_word_limited(grid, words, None)
}

/// [`find_longest_word`] with a per-word step budget. A word whose search is
/// abandoned counts as a miss.
#[must_use]
pub fn find_longest_word_limited<S: AsRef<str>>(
    grid: &Grid,
    words: &[S],
    max_steps: Option<usize>,
) -> Option<WordMatch> {
    search_order(words)
        .into_iter()
        .find_map(|word| trace(grid, word, max_steps))
}

/// Every word with a path on the grid, in search order.
#[must_use]
pub fn find_all_words<S: AsRef<str>>(
    grid: &Grid,
    words: &[S],
    max_steps: Option<usize>,
) -> Vec<WordMatch> {
    search_order(words)
        .into_iter()
        .filter_map(|word| trace(grid, word, max_steps))
        .collect()
}

fn trace(grid: &Grid, word: &str, max_steps: Option<usize>) -> Option<WordMatch> {
    match grid.search(word, max_steps) {
        SearchOutcome::Found(path) => Some(WordMatch {
            word: word.to_string(),
            path,
        }),
        SearchOutcome::NotFound => None,
        SearchOutcome::Abandoned { steps } => {
            info_log!("Gave up on '{}' after {} steps", word, steps);
            None
        }
    }
}
