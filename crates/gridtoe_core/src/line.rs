//! Win lines: rows, columns, and diagonals as coordinate sets.

use crate::cell::{Cell, Coord};
use crate::grid::Grid;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A line of N coordinates that wins the game when uniformly owned.
///
/// Two lines are equal when they cover the same coordinates, regardless of
/// the order they were listed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    coords: Vec<Coord>,
}

impl Line {
    /// Creates a line from its coordinates. Input order is irrelevant.
    pub fn new(mut coords: Vec<Coord>) -> Self {
        coords.sort_unstable();
        Self { coords }
    }

    /// The coordinates covered by this line, in sorted order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// True when `mark` owns every coordinate of this line on `grid`.
    pub fn owned_by(&self, mark: Mark, grid: &Grid) -> bool {
        self.coords
            .iter()
            .all(|c| self.at(grid, *c).square().mark() == Some(mark))
    }

    /// Finds the move that denies `opponent` this line.
    ///
    /// Returns a cell carrying the blocking side's own mark when exactly one
    /// coordinate is still free and `opponent` owns every other one. Any
    /// other configuration is not an immediate threat: two open coordinates
    /// leave no forced move, and a single blocking mark already dead-ends
    /// the line.
    pub fn blocking_cell(&self, opponent: Mark, grid: &Grid) -> Option<Cell> {
        let mut free: Option<Coord> = None;
        let mut owned = 0;
        for coord in &self.coords {
            match self.at(grid, *coord).square().mark() {
                None => {
                    if free.is_some() {
                        return None;
                    }
                    free = Some(*coord);
                }
                Some(mark) if mark == opponent => owned += 1,
                Some(_) => return None,
            }
        }
        let coord = free?;
        if owned + 1 == self.coords.len() {
            debug!(x = coord.x, y = coord.y, %opponent, "line one move from completion");
            let cell = self.at(grid, coord);
            return Some(cell.with_mark(opponent.opponent()));
        }
        None
    }

    fn at(&self, grid: &Grid, coord: Coord) -> Cell {
        *grid
            .cell(coord.x, coord.y)
            .expect("line coordinate within grid bounds")
    }
}
