//! Draw detection.

use crate::grid::Grid;

/// True when every cell is occupied.
///
/// A full grid with no winner is a drawn game.
pub fn is_full(grid: &Grid) -> bool {
    grid.free_cells().is_empty()
}
