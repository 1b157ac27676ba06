//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Cell, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Every line of three, in evaluation order.
///
/// Rows top to bottom, columns left to right, then the main diagonal and
/// the anti-diagonal. The first complete line wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// The three collinear cells that decided a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// The three positions, in line order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three `(row, col)` coordinates, in line order.
    pub fn coords(&self) -> [(usize, usize); 3] {
        self.0.map(Position::coords)
    }

    /// Returns true if `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// First and last cell; the middle one is implied.
    pub fn endpoints(&self) -> (Position, Position) {
        (self.0[0], self.0[2])
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (start, end) = self.endpoints();
        write!(f, "{} to {}", start, end)
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Status the board implies.
    pub status: GameStatus,
    /// Completed line, present only for `WonBy`.
    pub line: Option<WinningLine>,
}

/// Checks if there is a winner on the board.
///
/// Returns the mark and the first complete line in [`LINES`] order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    LINES.into_iter().find_map(|[a, b, c]| match board.get(a) {
        Cell::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some((mark, WinningLine([a, b, c])))
        }
        _ => None,
    })
}

/// Evaluates a board into a status and optional winning line.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((mark, line)) = check_winner(board) {
        return Evaluation {
            status: GameStatus::WonBy(mark),
            line: Some(line),
        };
    }

    let status = if board.is_full() {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    };
    Evaluation { status, line: None }
}
