//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mark {
    /// Mark X (always moves first).
    #[default]
    X,
    /// Mark O (moves second).
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

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Lifecycle status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    #[default]
    InProgress,
    /// The given mark completed a line.
    WonBy(Mark),
    /// The board filled up with no complete line.
    Drawn,
}

impl GameStatus {
    /// Returns true for `WonBy` and `Drawn`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark, if the game was won.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::WonBy(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::WonBy(mark) => write!(f, "won by {}", mark),
            GameStatus::Drawn => write!(f, "drawn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::WonBy(Mark::O).is_terminal());
        assert!(GameStatus::Drawn.is_terminal());
        assert_eq!(GameStatus::WonBy(Mark::O).winner(), Some(Mark::O));
        assert_eq!(GameStatus::Drawn.winner(), None);
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(GameStatus::WonBy(Mark::X).to_string(), "won by X");
    }
}
