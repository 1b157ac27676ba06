//! Player names, per-seat win/loss/draw records and the seat pair.

use crate::types::{GameStatus, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Name given to the X seat when none is entered.
pub const DEFAULT_X_NAME: &str = "Player 1";

/// Name given to the O seat when none is entered.
pub const DEFAULT_O_NAME: &str = "Player 2";

/// Default name for `mark`'s seat.
fn default_name(mark: Mark) -> &'static str {
    match mark {
        Mark::X => DEFAULT_X_NAME,
        Mark::O => DEFAULT_O_NAME,
    }
}

/// Trims `input`, falling back to the seat's default when nothing is left.
fn normalize_name(input: &str, mark: Mark) -> String {
    match input.trim() {
        "" => default_name(mark).to_string(),
        name => name.to_string(),
    }
}

/// The two names entered for a session, already defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name for the X seat.
    x: String,
    /// Name for the O seat.
    o: String,
}

impl PlayerNames {
    /// Builds names from raw input.
    ///
    /// Blank or whitespace-only input becomes "Player 1" / "Player 2";
    /// anything else is trimmed.
    #[instrument(skip(x, o))]
    pub fn new(x: impl AsRef<str>, o: impl AsRef<str>) -> Self {
        Self {
            x: normalize_name(x.as_ref(), Mark::X),
            o: normalize_name(o.as_ref(), Mark::O),
        }
    }

    /// Name bound to `mark`'s seat.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// One player's name and tally for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Display name.
    name: String,
    /// Games won.
    wins: u64,
    /// Games lost.
    losses: u64,
    /// Games drawn.
    draws: u64,
}

impl PlayerRecord {
    /// Creates a zeroed record for `mark`'s seat.
    ///
    /// The name is trimmed; blank input gets the seat's default name.
    pub fn new(mark: Mark, name: impl AsRef<str>) -> Self {
        Self {
            name: normalize_name(name.as_ref(), mark),
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Counts a win.
    pub fn add_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    /// Counts a loss.
    pub fn add_loss(&mut self) {
        self.losses = self.losses.saturating_add(1);
    }

    /// Counts a draw.
    pub fn add_draw(&mut self) {
        self.draws = self.draws.saturating_add(1);
    }

    /// Total games finished.
    pub fn games_played(&self) -> u64 {
        self.wins
            .saturating_add(self.losses)
            .saturating_add(self.draws)
    }

    /// Counters as `W: 1 L: 0 D: 2`.
    pub fn summary(&self) -> String {
        format!("W: {} L: {} D: {}", self.wins, self.losses, self.draws)
    }
}

/// The X and O seats of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seats {
    x: PlayerRecord,
    o: PlayerRecord,
}

impl Seats {
    /// Fresh zeroed records under the given names.
    pub fn new(names: &PlayerNames) -> Self {
        Self {
            x: PlayerRecord::new(Mark::X, names.x()),
            o: PlayerRecord::new(Mark::O, names.o()),
        }
    }

    /// Record for `mark`'s seat.
    pub fn record(&self, mark: Mark) -> &PlayerRecord {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    fn record_mut(&mut self, mark: Mark) -> &mut PlayerRecord {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    /// Display name for `mark`'s seat.
    pub fn name(&self, mark: Mark) -> &str {
        self.record(mark).name()
    }

    /// Current names of both seats.
    pub fn names(&self) -> PlayerNames {
        PlayerNames {
            x: self.x.name.clone(),
            o: self.o.name.clone(),
        }
    }

    /// Credits a finished game to both seats.
    ///
    /// A win adds a win for the winner and a loss for the other seat; a draw
    /// adds a draw to each. `InProgress` changes nothing.
    #[instrument(skip(self))]
    pub fn record_outcome(&mut self, status: GameStatus) {
        match status {
            GameStatus::WonBy(winner) => {
                self.record_mut(winner).add_win();
                self.record_mut(winner.opponent()).add_loss();
            }
            GameStatus::Drawn => {
                self.x.add_draw();
                self.o.add_draw();
            }
            GameStatus::InProgress => return,
        }
        debug!(x = %self.x.summary(), o = %self.o.summary(), "Seat records updated");
    }
}
