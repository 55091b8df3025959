//! End-to-end scripted console sessions.

use gridtoe_console::{GameSession, View};
use gridtoe_core::Mark;
use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

type ScriptedView = Rc<RefCell<View<Cursor<String>, Vec<u8>>>>;

fn scripted(responses: &[&str]) -> ScriptedView {
    let input = responses.join("\n") + "\n";
    Rc::new(RefCell::new(View::new(Cursor::new(input), Vec::new())))
}

#[test]
fn test_hotseat_session_plays_a_scripted_round() {
    // Both seats scripted: o takes (0,0) and (0,1) around x's (1,1) and
    // wins down the left column.
    let view = scripted(&["2", "joe", "y", "o", "0 0", "1 1", "0 1", "n"]);
    let mut session = GameSession::from_prompts(view, true).unwrap();
    session.run().unwrap();

    assert_eq!(session.grid().winner(), Some(Mark::O));
    assert_eq!(session.grid().render(), "o _\n\no x");
}

#[test]
fn test_engine_blocks_but_first_mover_still_wins() {
    // On a 2x2 grid any two cells share a line, so the human moving first
    // wins regardless of the engine's forced block at (0,1).
    let view = scripted(&["2", "joe", "y", "o", "0 0", "1 0", "n"]);
    let mut session = GameSession::from_prompts(view, false).unwrap();
    session.run().unwrap();

    assert_eq!(session.grid().winner(), Some(Mark::O));
    assert_eq!(session.grid().render(), "o o\n\nx _");
}

#[test]
fn test_engine_leading_takes_center_then_converts() {
    // Machine goes first: center grab, then the block at (0,1) completes
    // the engine's own bottom row.
    let view = scripted(&["2", "joe", "n", "o", "0 0", "n"]);
    let mut session = GameSession::from_prompts(view, false).unwrap();
    session.run().unwrap();

    assert_eq!(session.grid().winner(), Some(Mark::X));
    assert_eq!(session.grid().render(), "o _\n\nx x");
}

#[test]
fn test_turn_counter_carries_across_rounds() {
    // Round one takes three moves, so the machine seat leads round two
    // even though the human asked to go first: the round-robin counter is
    // never reset.
    let view = scripted(&["2", "joe", "y", "o", "0 0", "1 0", "y", "0 0", "n"]);
    let mut session = GameSession::from_prompts(view, false).unwrap();
    session.run().unwrap();

    assert_eq!(session.grid().winner(), Some(Mark::X));
    assert_eq!(session.grid().render(), "o _\n\nx x");
}
