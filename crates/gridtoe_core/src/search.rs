//! Exhaustive move search with forced-move short circuits.
//!
//! The engine enumerates every continuation of the game rather than playing
//! minimax: each terminal grid is scored for the desired winner and the best
//! reachable leaf decides the move. Two heuristics run before the tree is
//! expanded, and they are what keep practical grid sizes tractable: grab the
//! center of an untouched grid, and take any forced block.

use crate::cell::Cell;
use crate::grid::Grid;
use crate::player::Player;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A fully played-out future: the score for the desired winner, the final
/// grid, and the ordered moves that reach it.
///
/// A score of +1 means the desired mark won the leaf, -1 that the opponent
/// did, and `None` a drawn grid. Outcomes live for a single search call.
#[derive(Debug, Clone, Serialize, Deserialize, derive_getters::Getters, derive_new::new)]
pub struct ScoredOutcome {
    score: Option<i8>,
    grid: Grid,
    moves: Vec<Cell>,
}

/// Brute-force search through all possible continuations of a grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngine;

impl SearchEngine {
    /// Creates a search engine.
    pub fn new() -> Self {
        Self
    }

    /// Selects the next move for `mover`.
    ///
    /// An untouched grid gets the center without any search. Otherwise a
    /// forced block is taken if the opponent threatens to complete a line
    /// next ply; only then is the full game tree enumerated and the first
    /// move of the best-scoring outcome returned. Calling this on a
    /// finished grid is a contract violation.
    #[instrument(skip_all, fields(mark = %mover.mark(), dim = grid.dim()))]
    pub fn next_move(&self, grid: &Grid, mover: &Player) -> Cell {
        assert!(grid.moves_left(), "next_move on a finished grid");
        let mark = *mover.mark();

        if grid.is_board_empty() {
            let center = grid.dim() / 2;
            debug!(x = center, y = center, "untouched grid, taking the center");
            return grid
                .cell(center, center)
                .expect("center within bounds")
                .with_mark(mark);
        }

        if let Some(block) = self.forced_block(grid, mark) {
            return block;
        }

        let outcomes = self.all_game_outcomes(grid, mark, mark, &[]);
        self.select(grid, mark, &outcomes)
    }

    /// Scans every line of the grid for one the opponent completes next
    /// ply, returning the denying move for the first threat found.
    fn forced_block(&self, grid: &Grid, mark: Mark) -> Option<Cell> {
        let opponent = mark.opponent();
        for y in 0..grid.dim() {
            for x in 0..grid.dim() {
                let cell = grid.cell(x, y).expect("scan within bounds");
                for line in cell.lines() {
                    if let Some(block) = line.blocking_cell(opponent, grid) {
                        debug!(x = block.x(), y = block.y(), "blocking opponent's line");
                        return Some(block);
                    }
                }
            }
        }
        None
    }

    /// Scores a terminal grid for `desired`: +1 when the desired mark won,
    /// -1 when the opponent did, none for a draw.
    fn score(grid: &Grid, desired: Mark) -> Option<i8> {
        match grid.winner() {
            Some(winner) if winner == desired => Some(1),
            Some(_) => Some(-1),
            None => None,
        }
    }

    /// Enumerates every terminal outcome reachable from `grid`.
    ///
    /// `active` is the mark about to move; turns alternate below it. Free
    /// cells expand in row-major order, which fixes the tie-break order of
    /// the final selection. Every leaf is explored regardless of whether an
    /// opponent would realistically choose that branch.
    pub fn all_game_outcomes(
        &self,
        grid: &Grid,
        desired: Mark,
        active: Mark,
        moves_so_far: &[Cell],
    ) -> Vec<ScoredOutcome> {
        if grid.winner().is_some() || grid.free_cells().is_empty() {
            let score = Self::score(grid, desired);
            debug!(?score, depth = moves_so_far.len(), "terminal grid");
            return vec![ScoredOutcome::new(score, grid.clone(), moves_so_far.to_vec())];
        }

        let mut outcomes = Vec::new();
        for cell in grid.free_cells() {
            let placed = cell.with_mark(active);
            let next = grid.apply_move(placed);
            let mut path = moves_so_far.to_vec();
            path.push(placed);
            outcomes.extend(self.all_game_outcomes(&next, desired, active.opponent(), &path));
        }
        outcomes
    }

    /// Picks the first outcome carrying the maximum score and returns the
    /// opening move of its path. Falls back to the first free cell when no
    /// outcome is scoreable (every continuation draws).
    fn select(&self, grid: &Grid, mark: Mark, outcomes: &[ScoredOutcome]) -> Cell {
        let mut best: Option<(i8, &ScoredOutcome)> = None;
        for outcome in outcomes {
            if let Some(score) = outcome.score() {
                if best.is_none_or(|(top, _)| *score > top) {
                    best = Some((*score, outcome));
                }
            }
        }
        match best {
            Some((score, outcome)) => {
                debug!(score, leaves = outcomes.len(), "selected best reachable outcome");
                *outcome.moves().first().expect("scored path is never empty")
            }
            None => {
                debug!("no scoreable outcome, falling back to first free cell");
                grid.free_cells()
                    .first()
                    .expect("grid has moves left")
                    .with_mark(mark)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_player(mark: Mark) -> Player {
        Player::new("engine".to_string(), mark, true, true)
    }

    fn place(grid: Grid, mark: Mark, x: usize, y: usize) -> Grid {
        let cell = grid.cell(x, y).unwrap().with_mark(mark);
        grid.apply_move(cell)
    }

    #[test]
    fn test_center_grab_on_untouched_grid() {
        let cell = SearchEngine::new().next_move(&Grid::new(3), &engine_player(Mark::X));
        assert_eq!((cell.x(), cell.y()), (1, 1));
    }

    #[test]
    fn test_trivial_grid_takes_the_only_cell() {
        let cell = SearchEngine::new().next_move(&Grid::new(1), &engine_player(Mark::O));
        assert_eq!((cell.x(), cell.y()), (0, 0));
        assert_eq!(cell.square().mark(), Some(Mark::O));
    }

    #[test]
    fn test_forced_block_before_search() {
        // o threatens row y=1 through (1,1) and (2,1); x must answer at (0,1).
        let grid = place(Grid::new(3), Mark::O, 2, 1);
        let grid = place(grid, Mark::X, 0, 0);
        let grid = place(grid, Mark::O, 1, 1);

        let cell = SearchEngine::new().next_move(&grid, &engine_player(Mark::X));
        assert_eq!((cell.x(), cell.y()), (0, 1));
        assert_eq!(cell.square().mark(), Some(Mark::X));
    }

    #[test]
    fn test_draw_only_position_falls_back_to_first_free_cell() {
        // One cell left, no threat through it, filling it wins nothing.
        let moves = [
            (Mark::X, 0, 0),
            (Mark::O, 1, 0),
            (Mark::X, 2, 0),
            (Mark::X, 0, 1),
            (Mark::O, 1, 1),
            (Mark::O, 2, 1),
            (Mark::O, 0, 2),
            (Mark::X, 1, 2),
        ];
        let grid = moves
            .into_iter()
            .fold(Grid::new(3), |g, (mark, x, y)| place(g, mark, x, y));

        let cell = SearchEngine::new().next_move(&grid, &engine_player(Mark::X));
        assert_eq!((cell.x(), cell.y()), (2, 2));
        assert_eq!(cell.square().mark(), Some(Mark::X));
    }

    #[test]
    fn test_tie_breaks_are_deterministic() {
        let grid = place(Grid::new(3), Mark::O, 0, 0);
        let engine = SearchEngine::new();
        let first = engine.next_move(&grid, &engine_player(Mark::X));
        let second = engine.next_move(&grid, &engine_player(Mark::X));
        assert_eq!(first, second);
    }

    #[test]
    fn test_outcome_paths_replay_as_json() {
        let grid = place(Grid::new(2), Mark::X, 0, 0);
        let outcomes =
            SearchEngine::new().all_game_outcomes(&grid, Mark::O, Mark::O, &[]);
        let encoded = serde_json::to_string(outcomes[0].moves()).unwrap();
        let decoded: Vec<Cell> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(&decoded, outcomes[0].moves());
    }
}
