//! Cell values and the win-line geometry radiating from them.

use crate::line::Line;
use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};

/// A 0-indexed (x, y) grid coordinate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Coord {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

/// A single cell of an N×N grid.
///
/// Cells are values: placing a mark never mutates in place, it produces a
/// new `Cell` at the same coordinate via [`Cell::with_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    square: Square,
    coord: Coord,
    dim: usize,
}

impl Cell {
    /// Creates a cell at (x, y) on a grid of the given dimension.
    ///
    /// Coordinates outside `[0, dim)` break the cell invariant and fail
    /// fast.
    pub fn new(square: Square, x: usize, y: usize, dim: usize) -> Self {
        assert!(
            x < dim && y < dim,
            "cell coordinate ({x},{y}) outside grid of dimension {dim}"
        );
        Self {
            square,
            coord: Coord::new(x, y),
            dim,
        }
    }

    /// Contents of this cell.
    pub fn square(&self) -> Square {
        self.square
    }

    /// Coordinate of this cell.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Column index.
    pub fn x(&self) -> usize {
        self.coord.x
    }

    /// Row index.
    pub fn y(&self) -> usize {
        self.coord.y
    }

    /// Dimension of the grid this cell belongs to.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns a copy of this cell carrying `mark`.
    pub fn with_mark(&self, mark: Mark) -> Self {
        Self {
            square: Square::Occupied(mark),
            ..*self
        }
    }

    /// True when no mark has been placed here.
    pub fn is_free(&self) -> bool {
        self.square == Square::Empty
    }

    /// All win lines passing through this cell.
    ///
    /// Every cell sits on its column and its row. A cell with x == y also
    /// sits on the main diagonal, and one with dim-1-x == y on the
    /// anti-diagonal; the true center of an odd grid sits on both. Lines are
    /// deduplicated by coordinate set, so a 1×1 grid degenerates to the
    /// single trivial line.
    pub fn lines(&self) -> Vec<Line> {
        let n = self.dim;
        let Coord { x, y } = self.coord;

        let column = Line::new((0..n).map(|row| Coord::new(x, row)).collect());
        let row = Line::new((0..n).map(|col| Coord::new(col, y)).collect());
        let main_diagonal = (x == y).then(|| Line::new((0..n).map(|i| Coord::new(i, i)).collect()));
        let anti_diagonal =
            (n - 1 - x == y).then(|| Line::new((0..n).map(|i| Coord::new(n - 1 - i, i)).collect()));

        let mut lines = Vec::with_capacity(4);
        for candidate in [Some(column), Some(row), main_diagonal, anti_diagonal]
            .into_iter()
            .flatten()
        {
            if !lines.contains(&candidate) {
                lines.push(candidate);
            }
        }
        lines
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.square)
    }
}
