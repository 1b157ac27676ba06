//! The 3x3 board.

use crate::error::MoveError;
use crate::position::Position;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for coordinates outside `0..=2`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Places `mark` at `(row, col)` and returns the position it landed on.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for bad coordinates and
    /// [`MoveError::CellOccupied`] if the cell already holds a mark.
    /// The board is untouched on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<Position, MoveError> {
        let pos = Position::from_coords(row, col)?;
        self.place_at(pos, mark)?;
        Ok(pos)
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the cell already holds a mark.
    pub fn place_at(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty_at(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(mark);
        Ok(())
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns true when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Number of cells holding any mark.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Iterates over every position with its cell, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }

    /// Positions that are still empty.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their keypad number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (pos, cell) in self.iter() {
            let symbol = match cell {
                Cell::Empty => pos.number().to_string(),
                Cell::Occupied(mark) => mark.to_string(),
            };
            result.push_str(&symbol);
            match pos.col() {
                2 if pos.row() < 2 => result.push_str("\n-+-+-\n"),
                2 => {}
                _ => result.push('|'),
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.iter().all(|(_, c)| c.is_empty()));
        assert!(!board.is_full());
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.cell_at(0, 3),
            Err(MoveError::OutOfRange { row: 0, col: 3 })
        );
        assert_eq!(board.cell_at(2, 2), Ok(Cell::Empty));
    }

    #[test]
    fn test_place_and_read_back() {
        let mut board = Board::new();
        assert_eq!(board.place(1, 2, Mark::O), Ok(Position::MiddleRight));
        assert_eq!(board.cell_at(1, 2), Ok(Cell::Occupied(Mark::O)));
        assert_eq!(board.count(Mark::O), 1);
        assert_eq!(board.count(Mark::X), 0);
    }

    #[test]
    fn test_place_on_occupied_leaves_cell() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        assert_eq!(
            board.place(0, 0, Mark::O),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
        assert_eq!(board.cell_at(0, 0), Ok(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_full_and_reset() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place_at(pos, Mark::X).unwrap();
        }
        assert!(board.is_full());
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        board.place(1, 1, Mark::O).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
