//! Noughts - a two-player tic-tac-toe session engine.
//!
//! The engine is a small synchronous state machine with no rendering
//! references. A front end feeds it "select cell" intents and renders the
//! values it returns.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of cells
//! - **Rules**: pure win/draw evaluation over a board
//! - **Game**: one round of play (board, turn, status, history)
//! - **GameEngine**: the session context, a game plus seat records and timer
//!
//! # Example
//!
//! ```
//! use noughts::{GameEngine, GameStatus, Mark, PlayerNames};
//!
//! let mut engine = GameEngine::new(PlayerNames::new("Ada", ""));
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     engine.apply_move(row, col).unwrap();
//! }
//! assert_eq!(*engine.status(), GameStatus::WonBy(Mark::X));
//! assert_eq!(engine.record(Mark::O).summary(), "W: 0 L: 1 D: 0");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
mod game;
mod invariants;
mod player;
mod position;
mod rules;
mod timer;
mod types;

pub use action::Move;
pub use board::Board;
pub use engine::{GameEngine, GameEvent, Restart, StatusSummary, TurnLabel};
pub use error::MoveError;
pub use game::{Game, MoveOutcome};
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, GameInvariants, HistoryConsistentInvariant,
    Invariant, InvariantSet, InvariantViolation,
};
pub use player::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerNames, PlayerRecord, Seats};
pub use position::Position;
pub use rules::{Evaluation, LINES, WinningLine, check_winner, evaluate, is_draw};
pub use timer::{IntervalScheduler, ManualScheduler, SessionTimer, TickScheduler};
pub use types::{Cell, GameStatus, Mark};
