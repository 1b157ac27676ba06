//! Game screen: board, status line, seat records and the clock.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use noughts::{
    GameEngine, GameEvent, IntervalScheduler, Mark, PlayerNames, Position, TickScheduler,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::input::{keypad_position, move_cursor};
use crate::screen::{Screen, ScreenTransition};
use crate::settings::Settings;
use crate::ui::draw_board;

/// Starts a session with a debug-log observer attached.
#[instrument(skip(names))]
pub fn start_session(names: PlayerNames) -> GameEngine {
    let mut engine = GameEngine::new(names);
    engine.subscribe(|event: &GameEvent| debug!(?event, "Game event"));
    engine
}

/// State for the game screen.
#[derive(Debug)]
pub struct GameScreen {
    engine: GameEngine,
    cursor: Position,
    message: Option<String>,
    scheduler: IntervalScheduler,
}

impl GameScreen {
    /// Wraps a running engine; the clock ticks once per wall-clock second.
    #[instrument(skip(engine))]
    pub fn new(engine: GameEngine) -> Self {
        debug!("Initializing GameScreen");
        Self {
            engine,
            cursor: Position::Center,
            message: None,
            scheduler: IntervalScheduler::every_second(),
        }
    }

    /// The session engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gives the engine back, e.g. to reuse it after name entry.
    pub fn into_engine(self) -> GameEngine {
        self.engine
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last rejection message, cleared by the next accepted action.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Interval between clock ticks.
    pub fn tick_period(&self) -> Duration {
        self.scheduler.period()
    }

    /// Advances the clock by whatever ticks are due.
    pub fn tick(&mut self) {
        self.engine.pump(&mut self.scheduler);
    }

    fn select(&mut self, pos: Position) {
        self.cursor = pos;
        let (row, col) = pos.coords();
        match self.engine.apply_move(row, col) {
            Ok(outcome) => {
                self.message = None;
                if outcome.is_game_over() {
                    info!(status = %outcome.status, "Game finished");
                }
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn play_again(&mut self) {
        self.engine.play_again();
        self.scheduler.resync();
        self.cursor = Position::Center;
        self.message = None;
    }

    fn player_line(&self, mark: Mark) -> Span<'_> {
        let label = format!(" {} ({}) ", self.engine.seats().name(mark), mark);
        let base = match mark {
            Mark::X => Style::default().fg(Color::Blue),
            Mark::O => Style::default().fg(Color::Red),
        };
        let to_move = !self.engine.status().is_terminal() && self.engine.game().to_move() == mark;
        if to_move {
            Span::styled(label, base.add_modifier(Modifier::BOLD | Modifier::REVERSED))
        } else {
            Span::styled(label, base)
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect, settings: &Settings) {
        let mut lines = Vec::new();
        if *settings.show_stats() {
            for mark in [Mark::X, Mark::O] {
                let record = self.engine.record(mark);
                lines.push(Line::from(format!("{}: {}", record.name(), record.summary())));
            }
        }
        if *settings.show_timer() {
            lines.push(Line::from(format!("Time: {}", self.engine.timer().clock())));
        }
        if let Some(message) = self.message() {
            lines.push(Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red),
            )));
        }
        let footer = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame, settings))]
    fn render(&self, frame: &mut Frame, settings: &Settings) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(7),
                Constraint::Length(6),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let summary = self.engine.status_summary();
        let status_style = if summary.is_terminal() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let status = Paragraph::new(summary.to_string())
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Tic Tac Toe "));
        frame.render_widget(status, chunks[0]);

        let players = Paragraph::new(Line::from(vec![
            self.player_line(Mark::X),
            Span::raw("   "),
            self.player_line(Mark::O),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(players, chunks[1]);

        let cursor = (!summary.is_terminal()).then_some(self.cursor());
        draw_board(
            frame,
            chunks[2],
            self.engine.board(),
            cursor,
            self.engine.winning_line(),
        );

        self.draw_footer(frame, chunks[3], settings);

        let help = "Arrows/1-9: pick  Enter: place  p: play again  n: new game  q: quit";
        let help = Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if let Some(pos) = keypad_position(key.code) {
            self.select(pos);
            return ScreenTransition::Stay;
        }
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select(self.cursor);
                ScreenTransition::Stay
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.play_again();
                ScreenTransition::Stay
            }
            KeyCode::Char('n') | KeyCode::Char('N') => ScreenTransition::EditPlayers,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use noughts::GameStatus;
    use std::io::Write;

    fn screen() -> GameScreen {
        let engine = start_session(PlayerNames::new("Ada", "Grace"));
        GameScreen::new(engine)
    }

    fn press(screen: &mut GameScreen, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn play_digits(screen: &mut GameScreen, digits: &str) {
        for c in digits.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_digit_places_mark() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('5'));
        assert_eq!(screen.engine().history().len(), 1);
        assert_eq!(screen.engine().game().to_move(), Mark::O);
        assert_eq!(screen.cursor(), Position::Center);
    }

    #[test]
    fn test_cursor_then_enter_places_mark() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Up);
        press(&mut screen, KeyCode::Left);
        press(&mut screen, KeyCode::Enter);
        assert_eq!(
            screen.engine().board().get(Position::TopLeft),
            noughts::Cell::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_occupied_cell_sets_message() {
        let mut screen = screen();
        play_digits(&mut screen, "55");
        assert_eq!(screen.message(), Some("Center is already occupied"));
        assert_eq!(screen.engine().history().len(), 1);

        play_digits(&mut screen, "1");
        assert_eq!(screen.message(), None);
    }

    #[test]
    fn test_win_then_play_again_keeps_records() {
        let mut screen = screen();
        play_digits(&mut screen, "14253");
        assert_eq!(*screen.engine().status(), GameStatus::WonBy(Mark::X));

        play_digits(&mut screen, "9");
        assert_eq!(screen.message(), Some("Game is already over"));

        assert_eq!(press(&mut screen, KeyCode::Char('p')), ScreenTransition::Stay);
        assert_eq!(*screen.engine().status(), GameStatus::InProgress);
        assert_eq!(screen.engine().board().filled(), 0);
        assert_eq!(*screen.engine().record(Mark::X).wins(), 1);
        assert_eq!(*screen.engine().record(Mark::O).losses(), 1);
        assert_eq!(screen.message(), None);
    }

    #[test]
    fn test_clock_ticks_once_per_second_regardless_of_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_timer = true").unwrap();
        writeln!(file, "tick_millis = 0").unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert!(*settings.show_timer());

        let mut screen = GameScreen::new(start_session(PlayerNames::default()));
        assert_eq!(screen.tick_period(), Duration::from_secs(1));

        std::thread::sleep(Duration::from_millis(50));
        screen.tick();
        assert_eq!(screen.engine().elapsed_seconds(), 0);
    }

    #[test]
    fn test_new_game_and_quit_keys() {
        let mut screen = screen();
        assert_eq!(press(&mut screen, KeyCode::Char('n')), ScreenTransition::EditPlayers);
        assert_eq!(press(&mut screen, KeyCode::Char('q')), ScreenTransition::Quit);
    }
}
