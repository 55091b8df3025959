//! Round-robin turn order.

use crate::player::Mover;
use tracing::debug;

/// Alternates between two seated players, the one who goes first leading.
///
/// Purely a round-robin over an internal counter; no geometry knowledge
/// lives here. The counter is not reset between rounds.
#[derive(Debug)]
pub struct TurnOrder {
    movers: [Mover; 2],
    count: usize,
}

impl TurnOrder {
    /// Orders two seats so that the player with `goes_first` set leads.
    pub fn new(a: Mover, b: Mover) -> Self {
        let movers = if *a.player().goes_first() {
            [a, b]
        } else {
            [b, a]
        };
        Self { movers, count: 0 }
    }

    /// Returns the next player to move, advancing the internal counter.
    pub fn next_mover(&mut self) -> &mut Mover {
        let index = self.count % 2;
        self.count += 1;
        debug!(index, count = self.count, "turn advanced");
        &mut self.movers[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{EngineSource, Player};
    use crate::types::Mark;

    fn seat(name: &str, mark: Mark, goes_first: bool) -> Mover {
        Mover::new(
            Player::new(name.to_string(), mark, goes_first, true),
            Box::new(EngineSource::default()),
        )
    }

    #[test]
    fn test_goes_first_player_leads() {
        let mut turn = TurnOrder::new(seat("late", Mark::X, false), seat("lead", Mark::O, true));
        assert_eq!(turn.next_mover().player().name(), "lead");
        assert_eq!(turn.next_mover().player().name(), "late");
    }

    #[test]
    fn test_alternation_wraps() {
        let mut turn = TurnOrder::new(seat("a", Mark::X, true), seat("b", Mark::O, false));
        let names: Vec<String> = (0..4)
            .map(|_| turn.next_mover().player().name().clone())
            .collect();
        assert_eq!(names, vec!["a", "b", "a", "b"]);
    }
}
