//! Pure MxM tic-tac-toe game logic with exhaustive move search.
//!
//! The crate is the engine half of gridtoe: an immutable-per-move [`Grid`],
//! the [`Line`] geometry that decides wins on rows, columns, and diagonals
//! for any dimension from 1 through 5, and a [`SearchEngine`] that picks
//! moves by brute-force enumeration of every continuation, short-circuited
//! by center-grab and forced-block heuristics. Frontends plug in through
//! [`MoveSource`], so no I/O lives here.
//!
//! # Example
//!
//! ```
//! use gridtoe_core::{Grid, Mark, Player, SearchEngine};
//!
//! let grid = Grid::new(3);
//! let mover = Player::new("engine".to_string(), Mark::X, true, true);
//! let cell = SearchEngine::new().next_move(&grid, &mover);
//! assert_eq!((cell.x(), cell.y()), (1, 1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod grid;
mod line;
mod player;
mod rules;
mod search;
mod turn;
mod types;

pub use cell::{Cell, Coord};
pub use grid::{Grid, GridError};
pub use line::Line;
pub use player::{EngineSource, MoveSource, Mover, Player};
pub use search::{ScoredOutcome, SearchEngine};
pub use turn::TurnOrder;
pub use types::{Mark, Square};
