//! Screen trait and transition type for the front-end state machine.

use crossterm::event::KeyEvent;
use noughts::PlayerNames;
use ratatui::Frame;

use crate::settings::Settings;

/// The result of handling an input event on a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Start a game with these players.
    StartGame(PlayerNames),
    /// Go back to name entry for a brand-new session.
    EditPlayers,
    /// Exit cleanly.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles key events.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, settings: &Settings);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
