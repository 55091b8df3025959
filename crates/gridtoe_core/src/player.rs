//! Players and their pluggable move sources.

use crate::cell::Cell;
use crate::grid::Grid;
use crate::search::SearchEngine;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Identity of one of the two players.
///
/// A player is stateless except for identity: the same value is reused
/// across a whole game. The `internal` flag marks the machine seat so the
/// frontend knows whose moves to announce.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
)]
pub struct Player {
    name: String,
    mark: Mark,
    goes_first: bool,
    internal: bool,
}

/// Strategy producing a player's next move.
///
/// This is the seam between the engine and any frontend: the console
/// injects a prompting source for the human seat and an engine-backed
/// source for the machine seat, and the core never touches I/O.
pub trait MoveSource {
    /// Produces the next move for `player` on `grid`.
    fn next_move(&mut self, player: &Player, grid: &Grid) -> anyhow::Result<Cell>;
}

/// Move source backed by the exhaustive search engine.
#[derive(Debug, Clone, Copy, Default, derive_new::new)]
pub struct EngineSource {
    engine: SearchEngine,
}

impl MoveSource for EngineSource {
    fn next_move(&mut self, player: &Player, grid: &Grid) -> anyhow::Result<Cell> {
        Ok(self.engine.next_move(grid, player))
    }
}

/// A player seated with their move source.
pub struct Mover {
    player: Player,
    source: Box<dyn MoveSource>,
}

impl Mover {
    /// Seats `player` with `source`.
    pub fn new(player: Player, source: Box<dyn MoveSource>) -> Self {
        Self { player, source }
    }

    /// The seated player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Produces this player's next move on `grid`.
    #[instrument(skip_all, fields(player = %self.player.name()))]
    pub fn play(&mut self, grid: &Grid) -> anyhow::Result<Cell> {
        self.source.next_move(&self.player, grid)
    }
}

impl std::fmt::Debug for Mover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mover")
            .field("player", &self.player)
            .finish_non_exhaustive()
    }
}
