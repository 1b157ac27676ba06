//! The session engine: one game plus the seat records and timer that
//! outlive it.

use crate::action::Move;
use crate::board::Board;
use crate::error::MoveError;
use crate::game::{Game, MoveOutcome};
use crate::player::{PlayerNames, PlayerRecord, Seats};
use crate::rules::WinningLine;
use crate::timer::{SessionTimer, TickScheduler};
use crate::types::{GameStatus, Mark};
use tracing::{info, instrument, warn};

/// Notifications pushed to subscribers after the engine changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was accepted.
    MoveApplied {
        /// The move that was applied.
        mv: Move,
        /// Mark to move next, `None` if the move ended the game.
        next_turn: Option<Mark>,
    },
    /// The game reached a terminal status.
    GameOver {
        /// `WonBy` or `Drawn`.
        status: GameStatus,
        /// Completed line for a win.
        winning_line: Option<WinningLine>,
    },
    /// A new game began.
    Restarted {
        /// Whether the seat records were carried over.
        kept_players: bool,
    },
}

/// How to begin the next game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restart {
    /// "Play again": same names, records carried over.
    SamePlayers,
    /// "New game": fresh zeroed records under these names.
    NewPlayers(PlayerNames),
}

/// Whose turn it is, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnLabel {
    /// Mark to move.
    pub mark: Mark,
    /// Name bound to that mark's seat.
    pub name: String,
}

impl std::fmt::Display for TurnLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

/// Status plus the names a front end needs to describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSummary {
    /// Game on; `turn` is to move.
    InProgress {
        /// Player to move.
        turn: TurnLabel,
    },
    /// Game won.
    Won {
        /// Winning mark.
        mark: Mark,
        /// Winner's display name.
        winner: String,
    },
    /// Game drawn.
    Drawn,
}

impl StatusSummary {
    /// The underlying status.
    pub fn status(&self) -> GameStatus {
        match self {
            StatusSummary::InProgress { .. } => GameStatus::InProgress,
            StatusSummary::Won { mark, .. } => GameStatus::WonBy(*mark),
            StatusSummary::Drawn => GameStatus::Drawn,
        }
    }

    /// Returns true for a finished game.
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}

impl std::fmt::Display for StatusSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusSummary::InProgress { turn } => {
                write!(f, "{}'s turn ({})", turn.name, turn.mark)
            }
            StatusSummary::Won { winner, .. } => write!(f, "{} wins!", winner),
            StatusSummary::Drawn => write!(f, "Game Draw!"),
        }
    }
}

type Observer = Box<dyn FnMut(&GameEvent)>;

/// Tic-tac-toe session engine.
///
/// Owns the current [`Game`], the two seat records and the session timer.
/// The timer starts with each game and freezes when it ends; records
/// survive "play again" and are replaced by "new game".
pub struct GameEngine {
    game: Game,
    seats: Seats,
    timer: SessionTimer,
    observers: Vec<Observer>,
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("game", &self.game)
            .field("seats", &self.seats)
            .field("timer", &self.timer)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameEngine {
    /// Starts a session and its first game.
    #[instrument(fields(x = %names.x(), o = %names.o()))]
    pub fn new(names: PlayerNames) -> Self {
        let mut timer = SessionTimer::new();
        timer.start();
        info!("Session started");
        Self {
            game: Game::new(),
            seats: Seats::new(&names),
            timer,
            observers: Vec::new(),
        }
    }

    /// Registers a callback run after every state change.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    /// Places the current mark at `(row, col)`.
    ///
    /// On a terminal result the timer stops and both seat records are
    /// updated once; otherwise the turn passes to the other mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameAlreadyOver`], [`MoveError::OutOfRange`] or
    /// [`MoveError::CellOccupied`]. The engine is unchanged on error.
    #[instrument(skip(self), fields(mark = %self.game.to_move()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let outcome = match self.game.make_move(row, col) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Move rejected");
                return Err(e);
            }
        };

        self.notify(GameEvent::MoveApplied {
            mv: outcome.mv,
            next_turn: outcome.next_turn,
        });

        if outcome.is_game_over() {
            self.timer.stop();
            self.seats.record_outcome(outcome.status);
            info!(
                status = %outcome.status,
                elapsed = self.timer.elapsed_seconds(),
                x = %self.seats.record(Mark::X).summary(),
                o = %self.seats.record(Mark::O).summary(),
                "Game over"
            );
            self.notify(GameEvent::GameOver {
                status: outcome.status,
                winning_line: outcome.winning_line,
            });
        }

        Ok(outcome)
    }

    /// Begins a new game.
    ///
    /// The board is cleared, X moves first, and the timer restarts from
    /// zero. [`Restart::NewPlayers`] also replaces both seat records.
    #[instrument(skip(self))]
    pub fn restart(&mut self, restart: Restart) {
        let kept_players = match restart {
            Restart::SamePlayers => true,
            Restart::NewPlayers(names) => {
                self.seats = Seats::new(&names);
                false
            }
        };

        self.game.reset();
        self.timer.stop();
        self.timer.reset();
        self.timer.start();
        info!(kept_players, "Game restarted");
        self.notify(GameEvent::Restarted { kept_players });
    }

    /// "Play again" with the same players.
    pub fn play_again(&mut self) {
        self.restart(Restart::SamePlayers);
    }

    /// "New game" with a fresh pair of players.
    pub fn new_game(&mut self, names: PlayerNames) {
        self.restart(Restart::NewPlayers(names));
    }

    /// Feeds due ticks from `scheduler` into the timer.
    pub fn pump(&mut self, scheduler: &mut dyn TickScheduler) {
        let timer = &mut self.timer;
        scheduler.on_tick(&mut || timer.tick());
    }

    /// Mark to move and the name bound to it.
    ///
    /// After the game ends this is the player who made the final move.
    pub fn current_turn_label(&self) -> TurnLabel {
        let mark = self.game.to_move();
        TurnLabel {
            mark,
            name: self.seats.name(mark).to_string(),
        }
    }

    /// Status with the winner's name or turn label filled in.
    pub fn status_summary(&self) -> StatusSummary {
        match *self.game.status() {
            GameStatus::InProgress => StatusSummary::InProgress {
                turn: self.current_turn_label(),
            },
            GameStatus::WonBy(mark) => StatusSummary::Won {
                mark,
                winner: self.seats.name(mark).to_string(),
            },
            GameStatus::Drawn => StatusSummary::Drawn,
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        self.game.status()
    }

    /// Returns the winning line of a won game.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.game.winning_line()
    }

    /// Returns the moves of the current game.
    pub fn history(&self) -> &[Move] {
        self.game.history()
    }

    /// Returns both seats.
    pub fn seats(&self) -> &Seats {
        &self.seats
    }

    /// Record for `mark`'s seat.
    pub fn record(&self, mark: Mark) -> &PlayerRecord {
        self.seats.record(mark)
    }

    /// Returns the session timer.
    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    /// Seconds elapsed in the current game.
    pub fn elapsed_seconds(&self) -> u64 {
        self.timer.elapsed_seconds()
    }
}
