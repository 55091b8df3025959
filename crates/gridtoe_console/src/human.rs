//! Human player that answers prompts on the console.

use crate::view::View;
use anyhow::Result;
use gridtoe_core::{Cell, Grid, MoveSource, Player};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// Move source that asks the human for coordinates through the shared view.
pub struct HumanSource<R, W> {
    view: Rc<RefCell<View<R, W>>>,
}

impl<R, W> HumanSource<R, W> {
    /// Creates a human source over the session's view.
    pub fn new(view: Rc<RefCell<View<R, W>>>) -> Self {
        Self { view }
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanSource<R, W> {
    fn next_move(&mut self, player: &Player, grid: &Grid) -> Result<Cell> {
        self.view.borrow_mut().prompt_for_move(grid, player)
    }
}
