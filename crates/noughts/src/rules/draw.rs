//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// Returns true when the board is full and nobody completed a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'X' => board.place(row, col, Mark::X).unwrap(),
                    'O' => board.place(row, col, Mark::O).unwrap(),
                    _ => continue,
                };
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::new();
        board.place_at(Position::Center, Mark::X).unwrap();
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = board_from(["XOX", "OXX", "OXO"]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner_on_full_board() {
        let board = board_from(["XXX", "OOX", "XOO"]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
