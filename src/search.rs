//! Knight-move path search.
//!
//! The search is an explicit-stack backtracking walk. Each [`Frame`] holds one
//! letter position: the coordinate currently chosen for it and the untried
//! alternatives for that same position. Advancing looks up the next letter's
//! candidates in the grid's adjacency index; a dead end retries siblings,
//! popping frames until an alternative is found or the stack empties.
//!
//! Cells may be revisited within one path. Because of that, whether a
//! `(coordinate, letter position)` pair can complete the word does not depend on
//! how it was reached, so pairs proven dead are remembered and skipped.

use crate::debug_log;
use crate::grid::{Grid, fold_case};
use crate::knight::{Coord, GRID_SIZE, Path};
use std::vec;

const _: () = assert!(GRID_SIZE * GRID_SIZE <= u64::BITS as usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    NotFound,
    /// The step budget ran out before the search finished.
    Abandoned { steps: usize },
}

impl SearchOutcome {
    #[must_use]
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound | Self::Abandoned { .. } => None,
        }
    }
}

struct Frame {
    /// Index of this frame's letter within the word.
    depth: usize,
    coord: Coord,
    siblings: vec::IntoIter<Coord>,
}

/// One bit per cell for each letter position.
struct DeadStates {
    masks: Vec<u64>,
}

impl DeadStates {
    fn new(word_len: usize) -> Self {
        Self {
            masks: vec![0; word_len],
        }
    }

    fn contains(&self, depth: usize, coord: Coord) -> bool {
        self.masks[depth] & (1 << coord.index()) != 0
    }

    fn mark(&mut self, depth: usize, coord: Coord) {
        self.masks[depth] |= 1 << coord.index();
    }
}

impl Grid {
    /// Trace `word` through the grid by knight moves, case-insensitively.
    ///
    /// Returns one coordinate per letter, or `None` when no path exists.
    #[must_use]
    pub fn find_path(&self, word: &str) -> Option<Path> {
        self.search(word, None).into_path()
    }

    /// Like [`Grid::find_path`], but gives up after `max_steps` frame
    /// expansions (adjacency lookups from the top of the stack) when a limit
    /// is set.
    #[must_use]
    pub fn search(&self, word: &str, max_steps: Option<usize>) -> SearchOutcome {
        let letters: Vec<char> = fold_case(word).chars().collect();
        if letters.is_empty() {
            return SearchOutcome::NotFound;
        }
        if let Some(missing) = letters.iter().find(|l| !self.contains_letter(**l)) {
            debug_log!("search('{}'): letter '{}' is not on the grid", word, missing);
            return SearchOutcome::NotFound;
        }

        let mut starts = self.positions_of(letters[0]).collect::<Vec<_>>().into_iter();
        let Some(first) = starts.next() else {
            return SearchOutcome::NotFound;
        };
        if letters.len() == 1 {
            return SearchOutcome::Found(vec![first]);
        }

        let last = letters.len() - 1;
        let mut dead = DeadStates::new(letters.len());
        let mut stack = vec![Frame {
            depth: 0,
            coord: first,
            siblings: starts,
        }];
        let mut steps = 0;

        while let Some(top) = stack.last() {
            if max_steps.is_some_and(|limit| steps >= limit) {
                debug_log!("search('{}'): abandoned after {} steps", word, steps);
                return SearchOutcome::Abandoned { steps };
            }
            steps += 1;

            let depth = top.depth;
            let mut candidates = self
                .neighbors_with(letters[depth], top.coord, letters[depth + 1])
                .iter()
                .copied()
                .filter(|c| !dead.contains(depth + 1, *c))
                .collect::<Vec<_>>()
                .into_iter();

            if let Some(next) = candidates.next() {
                stack.push(Frame {
                    depth: depth + 1,
                    coord: next,
                    siblings: candidates,
                });
                if depth + 1 == last {
                    debug_log!("search('{}'): found after {} steps", word, steps);
                    return SearchOutcome::Found(stack.iter().map(|f| f.coord).collect());
                }
                continue;
            }

            dead.mark(depth, top.coord);
            backtrack(&mut stack, &mut dead);
        }

        debug_log!("search('{}'): exhausted after {} steps", word, steps);
        SearchOutcome::NotFound
    }
}

/// Move the deepest frame that still has an untried sibling onto it, popping
/// exhausted frames on the way. A popped frame proves its parent's choice dead.
fn backtrack(stack: &mut Vec<Frame>, dead: &mut DeadStates) {
    while let Some(frame) = stack.last_mut() {
        let depth = frame.depth;
        if let Some(sibling) = frame.siblings.find(|c| !dead.contains(depth, *c)) {
            frame.coord = sibling;
            return;
        }
        stack.pop();
        if let Some(parent) = stack.last() {
            dead.mark(parent.depth, parent.coord);
        }
    }
}
