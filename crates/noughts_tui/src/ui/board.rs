//! The 3x3 grid with cursor and winning-line highlight.

use noughts::{Board, Cell, Mark, Position, WinningLine};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::center_rect;

const CELL_WIDTH: u16 = 7;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 5;

/// Symbol and style for one cell.
///
/// Empty cells show their keypad number. The winning line is drawn in
/// green and the cursor in reverse video. Pass `None` for `cursor` once
/// the game is over.
pub fn cell_appearance(
    cell: Cell,
    pos: Position,
    cursor: Option<Position>,
    winning_line: Option<&WinningLine>,
) -> (String, Style) {
    let (symbol, mut style) = match cell {
        Cell::Empty => (
            format!(" {} ", pos.number()),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Mark::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if winning_line.is_some_and(|line| line.contains(pos)) {
        style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
    }
    if cursor == Some(pos) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    (symbol, style)
}

/// Draws `board` centered in `area`.
pub fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    winning_line: Option<&WinningLine>,
) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(chunk);

        for col in 0..3 {
            if let Ok(pos) = Position::from_coords(row, col) {
                let (symbol, style) = cell_appearance(board.get(pos), pos, cursor, winning_line);
                let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
                    .alignment(Alignment::Center);
                frame.render_widget(cell, cols[col * 2]);
            }
        }
        for sep in [cols[1], cols[3]] {
            frame.render_widget(
                Paragraph::new("│").style(Style::default().fg(Color::DarkGray)),
                sep,
            );
        }
    }

    for sep in [rows[1], rows[3]] {
        frame.render_widget(
            Paragraph::new("─".repeat(BOARD_WIDTH as usize))
                .style(Style::default().fg(Color::DarkGray)),
            sep,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::evaluate;

    #[test]
    fn test_empty_cell_shows_keypad_number() {
        let (symbol, _) = cell_appearance(Cell::Empty, Position::Center, None, None);
        assert_eq!(symbol, " 5 ");
    }

    #[test]
    fn test_cursor_is_reversed() {
        let (_, style) =
            cell_appearance(Cell::Empty, Position::Center, Some(Position::Center), None);
        assert!(style.add_modifier.contains(Modifier::REVERSED));

        let (_, style) =
            cell_appearance(Cell::Empty, Position::TopLeft, Some(Position::Center), None);
        assert!(!style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_winning_line_is_green() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(0, col, Mark::X).unwrap();
        }
        let line = evaluate(&board).line.unwrap();

        let (_, style) = cell_appearance(
            board.get(Position::TopRight),
            Position::TopRight,
            None,
            Some(&line),
        );
        assert_eq!(style.fg, Some(Color::Green));

        let (_, style) = cell_appearance(
            board.get(Position::Center),
            Position::Center,
            None,
            Some(&line),
        );
        assert_ne!(style.fg, Some(Color::Green));
    }
}
