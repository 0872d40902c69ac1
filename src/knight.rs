//! Board geometry: the fixed grid size, knight-move offsets and coordinates.

use std::fmt;

/// Number of rows and columns in every grid.
pub const GRID_SIZE: usize = 8;

/// The eight knight-move offsets as `(row delta, column delta)`.
///
/// Neighbour lists in the adjacency index follow this order.
pub const KNIGHT_MOVES: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Ordered sequence of coordinates, one per letter of a traced word.
pub type Path = Vec<Coord>;

/// A zero-based `(row, column)` position. Ordering is row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Flat index `row * GRID_SIZE + col`, only meaningful for in-bounds coordinates.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// Destination of a single offset, or `None` when it leaves the board.
    #[must_use]
    pub fn offset(self, (d_row, d_col): (isize, isize)) -> Option<Self> {
        let dest = Self::new(
            self.row.checked_add_signed(d_row)?,
            self.col.checked_add_signed(d_col)?,
        );
        dest.in_bounds().then_some(dest)
    }

    /// In-bounds knight-move destinations, in `KNIGHT_MOVES` order.
    pub fn knight_moves(self) -> impl Iterator<Item = Self> {
        KNIGHT_MOVES.into_iter().filter_map(move |step| self.offset(step))
    }

    #[must_use]
    pub fn is_knight_move_to(self, other: Self) -> bool {
        self.knight_moves().any(|dest| dest == other)
    }

    /// Every cell of the board in row-major (scan) order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Self::new(row, col)))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Render a path as `(r, c) -> (r, c) -> ...`.
#[must_use]
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
