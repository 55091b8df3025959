//! The game grid: an immutable-per-move N×N board.

use crate::cell::Cell;
use crate::rules;
use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Error raised for grid access outside `[0, dim)`.
///
/// Out-of-bounds coordinates are always signaled to the caller, never
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// A coordinate fell outside the grid.
    #[display("Coordinates are out of bounds: ({_0},{_1})")]
    OutOfBounds(usize, usize),
}

impl std::error::Error for GridError {}

/// An N×N grid of cells, plus the winner once a line has been completed.
///
/// A grid is never mutated after construction: [`Grid::apply_move`] returns
/// a new grid, so futures explored by the search engine cannot interfere
/// with one another or with the caller's board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    dim: usize,
    cells: Vec<Cell>,
    winner: Option<Mark>,
}

impl Grid {
    /// Creates an empty grid of the given dimension.
    pub fn new(dim: usize) -> Self {
        assert!(dim >= 1, "grid dimension must be at least 1");
        let cells = (0..dim)
            .flat_map(|y| (0..dim).map(move |x| Cell::new(Square::Empty, x, y, dim)))
            .collect();
        Self {
            dim,
            cells,
            winner: None,
        }
    }

    /// Grid dimension N.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The winning mark, once a line has been completed.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Fetches the cell at (x, y).
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        if x >= self.dim || y >= self.dim {
            return Err(GridError::OutOfBounds(x, y));
        }
        Ok(&self.cells[y * self.dim + x])
    }

    /// Free cells in row-major order (y outer, x inner).
    ///
    /// Search enumerates candidate moves in exactly this order; score ties
    /// resolve to the first cell enumerated, so the order is part of the
    /// engine's observable behavior.
    pub fn free_cells(&self) -> Vec<Cell> {
        self.cells.iter().filter(|c| c.is_free()).copied().collect()
    }

    /// True while the game can continue: no winner yet and at least one
    /// free cell remaining.
    pub fn moves_left(&self) -> bool {
        self.winner.is_none() && !rules::is_full(self)
    }

    /// True when no mark has been placed anywhere.
    pub fn is_board_empty(&self) -> bool {
        self.free_cells().len() == self.dim * self.dim
    }

    /// Places `cell`, returning the updated grid and leaving the receiver
    /// untouched.
    ///
    /// The winner is set on the new grid when the placement completes any
    /// line through the cell. Calling this on a finished grid is a contract
    /// violation and fails fast.
    pub fn apply_move(&self, cell: Cell) -> Grid {
        assert!(self.moves_left(), "apply_move on a finished grid");
        assert!(
            cell.dim() == self.dim,
            "cell belongs to a grid of dimension {}, not {}",
            cell.dim(),
            self.dim
        );
        let mut next = self.clone();
        next.cells[cell.y() * self.dim + cell.x()] = cell;
        if next.is_winning_move(&cell) {
            debug!(winner = %cell, x = cell.x(), y = cell.y(), "line completed");
            next.winner = cell.square().mark();
        }
        next
    }

    /// True when some line through `cell` is fully owned by the cell's mark.
    pub fn is_winning_move(&self, cell: &Cell) -> bool {
        rules::is_winning_move(self, cell)
    }

    /// Renders the grid as text: cells joined by a single space, rows
    /// separated by a blank line, every cell right-justified to the widest
    /// rendered cell on the board.
    pub fn render(&self) -> String {
        let width = self
            .cells
            .iter()
            .map(|c| c.to_string().chars().count())
            .max()
            .unwrap_or(1);
        (0..self.dim)
            .map(|y| {
                (0..self.dim)
                    .map(|x| format!("{:>width$}", self.cells[y * self.dim + x]))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
