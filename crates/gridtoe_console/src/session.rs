//! The game session: rounds of tic-tac-toe between the human and the engine.

use crate::human::HumanSource;
use crate::view::View;
use anyhow::Result;
use gridtoe_core::{EngineSource, Grid, MoveSource, Mover, Player, TurnOrder};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{info, instrument};

/// Name of the machine seat.
const ENGINE_NAME: &str = "SomeCheapAI";

/// Runs rounds of tic-tac-toe until the human declines to continue.
///
/// The session prompts once for the grid and the human player, derives the
/// machine player (opposite mark, opposite turn preference), then loops:
/// fresh grid, alternating moves, result announcement, play-again prompt.
pub struct GameSession<R, W> {
    view: Rc<RefCell<View<R, W>>>,
    grid: Grid,
    turn: TurnOrder,
    hotseat: bool,
}

impl<R: BufRead + 'static, W: Write + 'static> GameSession<R, W> {
    /// Builds a session from console prompts.
    ///
    /// With `hotseat` set, the machine seat is driven from console input as
    /// well instead of the search engine.
    pub fn from_prompts(view: Rc<RefCell<View<R, W>>>, hotseat: bool) -> Result<Self> {
        let grid = view.borrow_mut().grid_from_input()?;
        let external = view.borrow_mut().player_from_input()?;
        let internal = Player::new(
            ENGINE_NAME.to_string(),
            external.mark().opponent(),
            !external.goes_first(),
            true,
        );
        info!(
            human = %external.name(),
            human_mark = %external.mark(),
            dim = grid.dim(),
            hotseat,
            "session configured"
        );

        let machine_source: Box<dyn MoveSource> = if hotseat {
            Box::new(HumanSource::new(view.clone()))
        } else {
            Box::new(EngineSource::default())
        };
        let machine = Mover::new(internal, machine_source);
        let human = Mover::new(external, Box::new(HumanSource::new(view.clone())));

        Ok(Self {
            view,
            grid,
            turn: TurnOrder::new(machine, human),
            hotseat,
        })
    }

    /// The current grid, inspectable after [`GameSession::run`] returns.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Runs rounds until the human declines another game.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.grid = Grid::new(self.grid.dim());
            loop {
                self.view.borrow_mut().display_grid(&self.grid)?;
                let mover = self.turn.next_mover();
                let cell = mover.play(&self.grid)?;
                if !self.hotseat {
                    self.view.borrow_mut().announce_move(mover.player(), &cell)?;
                }
                self.grid = self.grid.apply_move(cell);

                if !self.grid.moves_left() {
                    info!(winner = ?self.grid.winner(), "round finished");
                    self.view.borrow_mut().announce_result(&self.grid)?;
                    if !self.view.borrow_mut().yes_no("\nPlay again? (y/n): ")? {
                        return Ok(());
                    }
                    break;
                }
            }
        }
    }
}
