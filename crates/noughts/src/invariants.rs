//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. Debug builds check them in [`Game::make_move`]; they are also
//! testable on their own.

use crate::game::Game;
use crate::types::{Cell, Mark};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X count minus O count is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<Game> for BalancedMarksInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one marks"
    }
}

/// Invariant: every history entry is on the board and every mark is in the history.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.history().len() == game.board().filled()
            && game
                .history()
                .iter()
                .all(|mv| game.board().get(mv.position) == Cell::Occupied(mv.mark))
    }

    fn description() -> &'static str {
        "Move history matches the board"
    }
}

/// Invariant: players alternate X, O, X, ... and the turn marker agrees.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.mark == if i % 2 == 0 { Mark::X } else { Mark::O });
        if !alternates {
            return false;
        }

        match history.last() {
            None => game.to_move() == Mark::X,
            Some(last) if game.is_over() => game.to_move() == last.mark,
            Some(last) => game.to_move() == last.mark.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (
    BalancedMarksInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn played(moves: &[(usize, usize)]) -> Game {
        let mut game = Game::new();
        for &(row, col) in moves {
            game.make_move(row, col).unwrap();
        }
        game
    }

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        assert!(GameInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = played(&[(0, 0), (1, 1), (0, 2)]);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_win() {
        let game = played(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert!(game.is_over());
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_extra_mark_breaks_balance_and_history() {
        let mut game = played(&[(1, 1)]);
        game.board.place_at(Position::TopLeft, Mark::X).unwrap();

        assert!(!BalancedMarksInvariant::holds(&game));
        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == HistoryConsistentInvariant::description())
        );
    }

    #[test]
    fn test_wrong_turn_marker_detected() {
        let mut game = played(&[(1, 1)]);
        game.to_move = Mark::X;

        assert!(!AlternatingTurnInvariant::holds(&game));
        assert!(BalancedMarksInvariant::holds(&game));
    }
}
