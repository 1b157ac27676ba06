//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules are kept apart from board storage so the game
//! and the invariant checks can share them.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{Evaluation, LINES, WinningLine, check_winner, evaluate};
