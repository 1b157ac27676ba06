//! The nine cells of the board, addressable by name, number or coordinates.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell position on the tic-tac-toe board.
///
/// Positions are laid out in row-major order: index `row * 3 + col`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable cell name, e.g. `Top-left`.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major index into the board, 0 to 8.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Keypad number for this position (1-9).
    pub fn number(self) -> usize {
        self.to_index() + 1
    }

    /// Creates position from its keypad number (1-9).
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// Creates a position from row and column.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] unless both coordinates are in `0..=2`.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Result<Self, MoveError> {
        if row > 2 || col > 2 {
            return Err(MoveError::OutOfRange { row, col });
        }
        Self::from_index(row * 3 + col).ok_or(MoveError::OutOfRange { row, col })
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Returns `(row, col)`.
    pub fn coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Parse from keypad number (1-9) or label.
    ///
    /// Labels match case-insensitively, ignoring surrounding whitespace.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_number(num);
        }

        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_round_trip_every_cell() {
        for pos in Position::ALL {
            let (row, col) = pos.coords();
            assert_eq!(Position::from_coords(row, col), Ok(pos));
        }
    }

    #[test]
    fn test_from_coords_rejects_out_of_range() {
        assert_eq!(
            Position::from_coords(3, 0),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            Position::from_coords(1, 7),
            Err(MoveError::OutOfRange { row: 1, col: 7 })
        );
    }

    #[test]
    fn test_keypad_numbers() {
        assert_eq!(Position::from_number(1), Some(Position::TopLeft));
        assert_eq!(Position::from_number(9), Some(Position::BottomRight));
        assert_eq!(Position::from_number(0), None);
        assert_eq!(Position::from_number(10), None);
        assert_eq!(Position::Center.number(), 5);
    }

    #[test]
    fn test_parse_label_or_number() {
        assert_eq!(Position::from_label_or_number(" 5 "), Some(Position::Center));
        assert_eq!(
            Position::from_label_or_number("bottom-left"),
            Some(Position::BottomLeft)
        );
        assert_eq!(Position::from_label_or_number("nowhere"), None);
    }
}
