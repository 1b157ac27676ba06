//! Name entry screen: who plays X and who plays O.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use noughts::{DEFAULT_O_NAME, DEFAULT_X_NAME, Mark, PlayerNames};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::settings::Settings;
use crate::ui::center_rect;

/// Longest name accepted from the keyboard.
const MAX_NAME_LEN: usize = 24;

/// State for the name entry screen.
#[derive(Debug, Default)]
pub struct NameEntryScreen {
    x_input: String,
    o_input: String,
    focus: Mark,
}

impl NameEntryScreen {
    /// Creates an empty form with the X field focused.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing NameEntryScreen");
        Self::default()
    }

    /// Field currently receiving keystrokes.
    pub fn focus(&self) -> Mark {
        self.focus
    }

    fn input_mut(&mut self) -> &mut String {
        match self.focus {
            Mark::X => &mut self.x_input,
            Mark::O => &mut self.o_input,
        }
    }

    fn input(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x_input,
            Mark::O => &self.o_input,
        }
    }

    /// Names as they would be submitted now, defaults applied.
    pub fn names(&self) -> PlayerNames {
        PlayerNames::new(&self.x_input, &self.o_input)
    }

    fn field_line(&self, mark: Mark) -> Line<'_> {
        let label = match mark {
            Mark::X => "Player 1 (X): ",
            Mark::O => "Player 2 (O): ",
        };
        let placeholder = match mark {
            Mark::X => DEFAULT_X_NAME,
            Mark::O => DEFAULT_O_NAME,
        };
        let focused = self.focus() == mark;
        let value = self.input(mark);

        let value_span = if value.is_empty() && !focused {
            Span::styled(placeholder, Style::default().fg(Color::DarkGray))
        } else if focused {
            Span::styled(
                format!("{}_", value),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(value.to_string())
        };

        Line::from(vec![Span::raw(label), value_span])
    }
}

impl Screen for NameEntryScreen {
    #[instrument(skip(self, frame, _settings))]
    fn render(&self, frame: &mut Frame, _settings: &Settings) {
        let area = center_rect(frame.area(), 50, 11);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Enter Player Names")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let fields = Paragraph::new(vec![self.field_line(Mark::X), self.field_line(Mark::O)])
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(fields, chunks[1]);

        let help = Paragraph::new("Tab: switch field   Enter: start game   Esc: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.opponent();
                ScreenTransition::Stay
            }
            KeyCode::Enter if self.focus == Mark::X => {
                self.focus = Mark::O;
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let names = self.names();
                info!(x = %names.x(), o = %names.o(), "Players entered");
                ScreenTransition::StartGame(names)
            }
            KeyCode::Backspace => {
                self.input_mut().pop();
                ScreenTransition::Stay
            }
            KeyCode::Char(c)
                if !c.is_control() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                let input = self.input_mut();
                if input.chars().count() < MAX_NAME_LEN {
                    input.push(c);
                }
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }
}
