//! One round of tic-tac-toe: board, turn, status and history.

use crate::action::Move;
use crate::board::Board;
use crate::error::MoveError;
use crate::position::Position;
use crate::rules::{self, WinningLine};
use crate::types::{GameStatus, Mark};
use tracing::{debug, instrument};

/// What an accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub mv: Move,
    /// Status after the move.
    pub status: GameStatus,
    /// Completed line when the move won the game.
    pub winning_line: Option<WinningLine>,
    /// Mark to move next, `None` once the game is over.
    pub next_turn: Option<Mark>,
}

impl MoveOutcome {
    /// Returns true if this move ended the game.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Tic-tac-toe game state.
///
/// X always moves first. Once the status is terminal the current mark stays
/// on the player who made the final move.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) status: GameStatus,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is (the last mover once the game is over).
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the winning line, present only when the game was won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Positions the current player may still choose.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.empty_positions()
    }

    /// Places the current mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] if the game is won or drawn
    /// - [`MoveError::OutOfRange`] for coordinates outside `0..=2`
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    ///
    /// The game is unchanged on error.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        let mark = self.to_move;
        let position = self.board.place(row, col, mark)?;
        let mv = Move::new(mark, position);
        self.history.push(mv);

        let eval = rules::evaluate(&self.board);
        self.status = eval.status;
        self.winning_line = eval.line;
        if !eval.status.is_terminal() {
            self.to_move = mark.opponent();
        }
        debug!(%mv, status = %self.status, "Move applied");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(MoveOutcome {
            mv,
            status: self.status,
            winning_line: self.winning_line,
            next_turn: (!self.is_over()).then_some(self.to_move),
        })
    }

    /// Clears the board and history; X moves first again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::invariants::{GameInvariants, InvariantSet};

        if let Err(violations) = GameInvariants::check_all(self) {
            panic!("Game invariants violated: {:?}", violations);
        }
    }
}
