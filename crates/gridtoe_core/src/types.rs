//! Core mark and square types.

use serde::{Deserialize, Serialize};

/// A player's mark, rendered lowercase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum Mark {
    /// The `x` mark.
    #[display("x")]
    #[strum(serialize = "x", ascii_case_insensitive)]
    X,
    /// The `o` mark.
    #[display("o")]
    #[strum(serialize = "o", ascii_case_insensitive)]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Contents of a single grid cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Square {
    /// No mark placed yet.
    #[display("_")]
    Empty,
    /// Occupied by a player's mark.
    #[display("{_0}")]
    Occupied(Mark),
}

impl Square {
    /// Returns the mark occupying this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_marks_render_lowercase() {
        for mark in Mark::iter() {
            let rendered = mark.to_string();
            assert_eq!(rendered, rendered.to_lowercase());
        }
        assert_eq!(Square::Empty.to_string(), "_");
        assert_eq!(Square::Occupied(Mark::O).to_string(), "o");
    }

    #[test]
    fn test_mark_parses_either_case() {
        assert_eq!(Mark::from_str("X").unwrap(), Mark::X);
        assert_eq!(Mark::from_str("o").unwrap(), Mark::O);
        assert!(Mark::from_str("z").is_err());
    }
}
