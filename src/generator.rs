//! Random grid generation for building test fixtures.
//!
//! Placement is best effort: each word starts on a random free (or matching)
//! cell and walks random knight moves, stopping early when no move can take
//! the next letter. What was actually placed is reported per word.

use crate::debug_log;
use crate::grid::{Grid, normalize_row};
use crate::knight::{Coord, GRID_SIZE, KNIGHT_MOVES, Path};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

pub const DEFAULT_FILL_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Board under construction; `None` cells are still free.
type Board = [[Option<char>; GRID_SIZE]; GRID_SIZE];

/// The part of a word that made it onto the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Placed prefix of the normalised word.
    pub placed: String,
    pub path: Path,
    /// Letter count of the normalised word.
    pub target_len: usize,
}

impl Placement {
    fn empty(target_len: usize) -> Self {
        Self {
            placed: String::new(),
            path: Vec::new(),
            target_len,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.path.len() == self.target_len
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedGrid {
    pub grid: Grid,
    /// Keyed by the word as supplied.
    pub placements: HashMap<String, Placement>,
}

impl GeneratedGrid {
    /// Words that were only partly placed (or not at all), sorted by word.
    #[must_use]
    pub fn shortfalls(&self) -> Vec<(&str, &Placement)> {
        let mut short: Vec<(&str, &Placement)> = self
            .placements
            .iter()
            .filter(|(_, placement)| !placement.is_complete())
            .map(|(word, placement)| (word.as_str(), placement))
            .collect();
        short.sort_by_key(|(word, _)| *word);
        short
    }
}

/// Generate a grid holding as many of `words` as possible, filling the rest
/// from [`DEFAULT_FILL_ALPHABET`].
pub fn generate_grid<I, S, R>(words: I, rng: &mut R) -> GeneratedGrid
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    generate_grid_with_alphabet(words, DEFAULT_FILL_ALPHABET, rng)
}

/// Like [`generate_grid`] with a custom fill alphabet. The alphabet is
/// normalised like a grid row; if nothing remains the default is used.
pub fn generate_grid_with_alphabet<I, S, R>(
    words: I,
    fill_alphabet: &str,
    rng: &mut R,
) -> GeneratedGrid
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut fill: Vec<char> = normalize_row(fill_alphabet).chars().collect();
    if fill.is_empty() {
        fill = DEFAULT_FILL_ALPHABET.chars().collect();
    }

    let mut board: Board = [[None; GRID_SIZE]; GRID_SIZE];
    let mut placements = HashMap::new();
    for word in words {
        let word = word.as_ref();
        let letters: Vec<char> = normalize_row(word).chars().collect();
        if letters.is_empty() {
            continue;
        }
        let (next_board, placement) = place_word(board, &letters, rng);
        board = next_board;
        if !placement.is_complete() {
            debug_log!(
                "Placed {}/{} letters of '{}'",
                placement.path.len(),
                placement.target_len,
                word
            );
        }
        placements.insert(word.to_string(), placement);
    }

    let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
    for coord in Coord::all() {
        cells[coord.row][coord.col] = match board[coord.row][coord.col] {
            Some(letter) => letter,
            None => *fill.choose(rng).unwrap_or(&'a'),
        };
    }

    GeneratedGrid {
        grid: Grid::from_cells(cells),
        placements,
    }
}

/// Place as much of `letters` as possible on a copy of `board`, returning the
/// updated board and what was placed.
fn place_word<R: Rng + ?Sized>(
    mut board: Board,
    letters: &[char],
    rng: &mut R,
) -> (Board, Placement) {
    let mut placement = Placement::empty(letters.len());
    let Some((&first, rest)) = letters.split_first() else {
        return (board, placement);
    };

    let starts: Vec<Coord> = Coord::all()
        .filter(|coord| accepts(&board, *coord, first))
        .collect();
    let Some(&start) = starts.choose(rng) else {
        return (board, placement);
    };
    board = put(board, start, first, &mut placement);

    let mut current = start;
    for &letter in rest {
        let Some(next) = pick_step(&board, current, letter, rng) else {
            break;
        };
        board = put(board, next, letter, &mut placement);
        current = next;
    }
    (board, placement)
}

fn put(mut board: Board, coord: Coord, letter: char, placement: &mut Placement) -> Board {
    board[coord.row][coord.col] = Some(letter);
    placement.placed.push(letter);
    placement.path.push(coord);
    board
}

/// A random knight move from `from` whose destination can take `letter`.
fn pick_step<R: Rng + ?Sized>(
    board: &Board,
    from: Coord,
    letter: char,
    rng: &mut R,
) -> Option<Coord> {
    let mut moves = KNIGHT_MOVES;
    moves.shuffle(rng);
    moves
        .into_iter()
        .filter_map(|step| from.offset(step))
        .find(|dest| accepts(board, *dest, letter))
}

fn accepts(board: &Board, coord: Coord, letter: char) -> bool {
    board[coord.row][coord.col].is_none_or(|held| held == letter)
}
