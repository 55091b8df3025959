//! Win detection for a just-placed mark.

use crate::cell::Cell;
use crate::grid::Grid;

/// Checks whether the mark on `cell` fully owns any line through it.
///
/// Only the lines radiating from the placed cell need inspection: a move
/// can only complete a row, column, or diagonal it belongs to. An empty
/// cell never wins.
pub fn is_winning_move(grid: &Grid, cell: &Cell) -> bool {
    let Some(mark) = cell.square().mark() else {
        return false;
    };
    cell.lines().iter().any(|line| line.owned_by(mark, grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mark, Square};

    fn place(grid: Grid, mark: Mark, x: usize, y: usize) -> Grid {
        let cell = grid.cell(x, y).unwrap().with_mark(mark);
        grid.apply_move(cell)
    }

    #[test]
    fn test_no_win_on_empty_grid() {
        let grid = Grid::new(3);
        let cell = *grid.cell(0, 0).unwrap();
        assert!(!is_winning_move(&grid, &cell));
    }

    #[test]
    fn test_win_on_completed_row() {
        let grid = place(Grid::new(3), Mark::X, 0, 0);
        let grid = place(grid, Mark::O, 0, 1);
        let grid = place(grid, Mark::X, 1, 0);
        let grid = place(grid, Mark::O, 1, 1);
        let last = grid.cell(2, 0).unwrap().with_mark(Mark::X);
        let grid = grid.apply_move(last);
        assert!(is_winning_move(&grid, &last));
        assert_eq!(grid.winner(), Some(Mark::X));
    }

    #[test]
    fn test_win_on_anti_diagonal() {
        let grid = place(Grid::new(3), Mark::O, 2, 0);
        let grid = place(grid, Mark::X, 0, 0);
        let grid = place(grid, Mark::O, 1, 1);
        let grid = place(grid, Mark::X, 1, 0);
        let grid = place(grid, Mark::O, 0, 2);
        assert_eq!(grid.winner(), Some(Mark::O));
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let grid = place(Grid::new(3), Mark::X, 0, 0);
        let grid = place(grid, Mark::X, 1, 0);
        let placed = Cell::new(Square::Occupied(Mark::X), 1, 0, 3);
        assert!(!is_winning_move(&grid, &placed));
    }
}
