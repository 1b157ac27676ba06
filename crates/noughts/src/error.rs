//! Errors raised when a move is rejected.

use crate::position::Position;

/// Reason a move was rejected.
///
/// Every variant leaves the engine exactly as it was before the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column is outside `0..=2`.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}
