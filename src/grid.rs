//! The letter grid and its letter-partitioned knight-move adjacency index.
//!
//! A [`Grid`] is built once from text (or by the generator) and is read-only
//! afterwards; path search lives in [`crate::search`].

use crate::knight::{Coord, GRID_SIZE};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid must have exactly {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} must have exactly {expected} letters after normalisation, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("coordinate ({row}, {col}) lies outside the grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("grid file error: {0}")]
    Io(#[from] io::Error),
}

/// Next letter -> destinations holding it, in knight-move order.
type NextLetters = HashMap<char, Vec<Coord>>;

/// Letter -> origin cell holding it -> next-letter neighbours.
type AdjacencyIndex = HashMap<char, BTreeMap<Coord, NextLetters>>;

/// Case-fold text one character at a time.
///
/// Folding is per character so that a word and a grid row fold identically;
/// a character may expand to several (e.g. `'İ'`).
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Strip all whitespace from a grid row and case-fold what remains.
#[must_use]
pub fn normalize_row(line: &str) -> String {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
    adjacency: AdjacencyIndex,
}

impl Grid {
    /// Build a grid from exactly `GRID_SIZE` lines of text.
    ///
    /// Each line has its whitespace removed and is case-folded; the result must
    /// hold exactly `GRID_SIZE` characters.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<String> = lines
            .into_iter()
            .map(|line| normalize_row(line.as_ref()))
            .collect();
        if rows.len() != GRID_SIZE {
            return Err(GridError::RowCount {
                expected: GRID_SIZE,
                found: rows.len(),
            });
        }

        let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
        for (row, text) in rows.iter().enumerate() {
            let letters: Vec<char> = text.chars().collect();
            if letters.len() != GRID_SIZE {
                return Err(GridError::RowLength {
                    row,
                    expected: GRID_SIZE,
                    found: letters.len(),
                });
            }
            cells[row].copy_from_slice(&letters);
        }
        Ok(Self::from_cells(cells))
    }

    /// Build from already-normalised cells. Callers must supply folded,
    /// non-whitespace letters.
    pub(crate) fn from_cells(cells: [[char; GRID_SIZE]; GRID_SIZE]) -> Self {
        let adjacency = build_adjacency(&cells);
        Self { cells, adjacency }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        fs::read_to_string(path)?.parse()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GridError> {
        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Letter stored at `coord`.
    pub fn letter_at(&self, coord: Coord) -> Result<char, GridError> {
        if !coord.in_bounds() {
            return Err(GridError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        Ok(self.cells[coord.row][coord.col])
    }

    #[must_use]
    pub fn cells(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.adjacency.contains_key(&letter)
    }

    /// Every cell holding `letter`, in scan order.
    pub fn positions_of(&self, letter: char) -> impl Iterator<Item = Coord> + '_ {
        self.adjacency
            .get(&letter)
            .into_iter()
            .flat_map(|origins| origins.keys().copied())
    }

    /// Knight-move neighbours of `coord` (which holds `letter`) that hold `next`.
    #[must_use]
    pub fn neighbors_with(&self, letter: char, coord: Coord, next: char) -> &[Coord] {
        self.adjacency
            .get(&letter)
            .and_then(|origins| origins.get(&coord))
            .and_then(|by_letter| by_letter.get(&next))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn build_adjacency(cells: &[[char; GRID_SIZE]; GRID_SIZE]) -> AdjacencyIndex {
    let mut adjacency = AdjacencyIndex::new();
    for origin in Coord::all() {
        let letter = cells[origin.row][origin.col];
        let next_letters = adjacency
            .entry(letter)
            .or_default()
            .entry(origin)
            .or_default();
        for dest in origin.knight_moves() {
            next_letters
                .entry(cells[dest.row][dest.col])
                .or_default()
                .push(dest);
        }
    }
    adjacency
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}
