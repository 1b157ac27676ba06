//! Front-end controller: owns the active screen and drives the event loop.

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use noughts::{GameEngine, Mark, PlayerNames};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, instrument};

use crate::input::is_interrupt;
use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameScreen, NameEntryScreen, start_session};
use crate::settings::Settings;

/// Input poll timeout; bounds how stale the clock display can get.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Active screen in the front-end state machine.
#[derive(Debug)]
enum ActiveScreen {
    NameEntry(NameEntryScreen),
    Game(GameScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::NameEntry(s) => s,
            ActiveScreen::Game(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::NameEntry(s) => s,
            ActiveScreen::Game(s) => s,
        }
    }
}

/// Controller that drives the front end.
///
/// Call [`App::run`] to start the event loop.
#[derive(Debug)]
pub struct App {
    settings: Settings,
    screen: Option<ActiveScreen>,
    parked: Option<GameEngine>,
}

impl App {
    /// Creates the controller; with preset names the name screen is skipped.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings, preset: Option<PlayerNames>) -> Self {
        info!("Creating App");
        let screen = match preset {
            Some(names) => ActiveScreen::Game(GameScreen::new(start_session(names))),
            None => ActiveScreen::NameEntry(NameEntryScreen::new()),
        };
        Self {
            settings,
            screen: Some(screen),
            parked: None,
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> std::io::Result<()> {
        info!("Starting event loop");

        while let Some(mut screen) = self.screen.take() {
            if let ActiveScreen::Game(game) = &mut screen {
                game.tick();
            }

            let settings = self.settings;
            terminal.draw(|f| screen.as_screen().render(f, &settings))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
                && key.kind != KeyEventKind::Release
            {
                let transition = if is_interrupt(&key) {
                    ScreenTransition::Quit
                } else {
                    screen.as_screen_mut().handle_key(key)
                };
                self.screen = self.apply_transition(transition, screen);
            } else {
                self.screen = Some(screen);
            }
        }

        info!("Quitting");
        Ok(())
    }

    /// Computes the next screen; `None` means quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        match transition {
            ScreenTransition::Stay => Some(current),
            ScreenTransition::Quit => None,
            ScreenTransition::EditPlayers => {
                if let ActiveScreen::Game(game) = current {
                    let games = game.engine().record(Mark::X).games_played();
                    debug!(games, "Parking session");
                    self.parked = Some(game.into_engine());
                }
                Some(ActiveScreen::NameEntry(NameEntryScreen::new()))
            }
            ScreenTransition::StartGame(names) => {
                let engine = match self.parked.take() {
                    Some(mut engine) => {
                        engine.new_game(names);
                        engine
                    }
                    None => start_session(names),
                };
                Some(ActiveScreen::Game(GameScreen::new(engine)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_engine(screen: &Option<ActiveScreen>) -> &GameEngine {
        match screen {
            Some(ActiveScreen::Game(game)) => game.engine(),
            other => panic!("expected game screen, got {:?}", other),
        }
    }

    #[test]
    fn test_preset_names_skip_name_entry() {
        let app = App::new(Settings::default(), Some(PlayerNames::new("Ada", "Grace")));
        assert_eq!(game_engine(&app.screen).seats().name(Mark::X), "Ada");
    }

    #[test]
    fn test_without_preset_starts_at_name_entry() {
        let app = App::new(Settings::default(), None);
        assert!(matches!(app.screen, Some(ActiveScreen::NameEntry(_))));
    }

    #[test]
    fn test_new_game_reuses_engine_with_fresh_records() {
        let mut app = App::new(Settings::default(), Some(PlayerNames::new("Ada", "Grace")));
        let Some(ActiveScreen::Game(mut game)) = app.screen.take() else {
            panic!("expected game screen");
        };
        let mut engine = game.into_engine();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.apply_move(row, col).unwrap();
        }
        assert_eq!(*engine.record(Mark::X).wins(), 1);
        game = GameScreen::new(engine);

        let next = app.apply_transition(ScreenTransition::EditPlayers, ActiveScreen::Game(game));
        assert!(matches!(next, Some(ActiveScreen::NameEntry(_))));
        assert!(app.parked.is_some());

        let next = next.and_then(|screen| {
            app.apply_transition(
                ScreenTransition::StartGame(PlayerNames::new("Lin", "Kay")),
                screen,
            )
        });
        assert!(app.parked.is_none());
        let engine = game_engine(&next);
        assert_eq!(engine.seats().name(Mark::X), "Lin");
        assert_eq!(*engine.record(Mark::X).wins(), 0);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_quit_ends_loop() {
        let mut app = App::new(Settings::default(), None);
        let Some(current) = app.screen.take() else {
            panic!("expected a screen");
        };
        assert!(app.apply_transition(ScreenTransition::Quit, current).is_none());
    }
}
