//! Console prompting and rendering.
//!
//! The view is generic over its reader and writer so whole sessions can be
//! scripted in tests.

use anyhow::{Context, Result, bail};
use gridtoe_core::{Cell, Grid, Mark, Player};
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::str::FromStr;
use tracing::debug;

/// Acquires user input, writes the board to the console, and announces the
/// status of the game.
pub struct View<R, W> {
    input: R,
    output: W,
}

impl View<BufReader<Stdin>, Stdout> {
    /// View over process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> View<R, W> {
    /// Creates a view over an arbitrary reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading input")?;
        if read == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line.trim().to_string())
    }

    /// Prompts repeatedly until `valid` accepts the response.
    pub fn input_with(&mut self, prompt: &str, valid: impl Fn(&str) -> bool) -> Result<String> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let response = self.read_line()?;
            if valid(&response) {
                return Ok(response);
            }
        }
    }

    /// Prompts for a non-empty string.
    pub fn nonempty(&mut self, prompt: &str) -> Result<String> {
        self.input_with(prompt, |s| !s.is_empty())
    }

    /// Prompts for a y/n answer, either case.
    pub fn yes_no(&mut self, prompt: &str) -> Result<bool> {
        let response =
            self.input_with(prompt, |s| matches!(s.to_uppercase().as_str(), "Y" | "N"))?;
        Ok(response.eq_ignore_ascii_case("y"))
    }

    /// Prompts for the human player's name, turn preference, and mark.
    pub fn player_from_input(&mut self) -> Result<Player> {
        let name = self.nonempty("Please input player name: ")?;
        let goes_first = self.yes_no("Do you want to go first? (Y/N): ")?;
        let mark = self.input_with(
            "Please choose letter representing your moves ('X' or 'O'): ",
            |s| Mark::from_str(s).is_ok(),
        )?;
        let mark = Mark::from_str(&mark).expect("validated above");
        Ok(Player::new(name, mark, goes_first, false))
    }

    /// Prompts for the grid dimension, accepting 2 through 5.
    pub fn grid_from_input(&mut self) -> Result<Grid> {
        let dim = self.input_with(
            "How many cells for each row in grid? (pick between 2 and 5): ",
            |s| s.parse::<usize>().is_ok_and(|n| (2..=5).contains(&n)),
        )?;
        Ok(Grid::new(dim.parse().expect("validated above")))
    }

    /// Writes the current board.
    pub fn display_grid(&mut self, grid: &Grid) -> Result<()> {
        writeln!(self.output, "\nGame Board:\n{}", grid.render())?;
        Ok(())
    }

    /// Announces a machine move so the human can follow along. Human moves
    /// need no reminder.
    pub fn announce_move(&mut self, player: &Player, cell: &Cell) -> Result<()> {
        if *player.internal() {
            writeln!(
                self.output,
                "\nPlayer {} selected cell at ({},{}) for next move",
                player.name(),
                cell.x(),
                cell.y()
            )?;
        }
        Ok(())
    }

    /// Announces the result of a finished round, then shows the final board.
    pub fn announce_result(&mut self, grid: &Grid) -> Result<()> {
        match grid.winner() {
            Some(winner) => writeln!(
                self.output,
                "\nGame has been won by player who wisely chose '{winner}'. Congratulations!\n"
            )?,
            None => writeln!(self.output, "\nGame resulted in a draw\n")?,
        }
        self.display_grid(grid)
    }

    /// Prompts for the coordinates of a free cell and returns the chosen
    /// move carrying the player's mark.
    ///
    /// Two integers separated by anything non-numeric are accepted; the
    /// prompt repeats until they name a free in-bounds cell. Prompting on a
    /// finished grid is a contract violation.
    pub fn prompt_for_move(&mut self, grid: &Grid, player: &Player) -> Result<Cell> {
        assert!(grid.moves_left(), "prompting for a move on a finished grid");
        let prompt = format!(
            "\nYour move, {}. Enter x,y coordinates of a free cell (each coord >= 0 and < {}): ",
            player.name(),
            grid.dim(),
        );
        let response = self.input_with(&prompt, |s| {
            parse_coords(s).is_some_and(|(x, y)| grid.cell(x, y).is_ok_and(|c| c.is_free()))
        })?;
        let (x, y) = parse_coords(&response).expect("validated above");
        debug!(x, y, player = %player.name(), "human selected coordinates");
        Ok(grid.cell(x, y).expect("validated above").with_mark(*player.mark()))
    }
}

/// Extracts the first two integers from free-form input like "1,2" or "1 2".
fn parse_coords(s: &str) -> Option<(usize, usize)> {
    let mut parts = s
        .split(|c: char| !c.is_ascii_digit())
        .filter(|p| !p.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    Some((x, y))
}
