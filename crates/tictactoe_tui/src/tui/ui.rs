//! Stateless rendering of the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Mark, Position, Square};

use super::app::App;

const HELP: &str = "arrows/hjkl move  enter/space play  1-9 pick  r restart  q quit";

/// Renders title, board, status and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status_style = if app.is_interactive() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    let status = Paragraph::new(app.status())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Cell size in terminal columns and rows.
const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Grid of three cells per axis with one-character rules between them.
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let [board_area] = Layout::vertical([Constraint::Length(BOARD_HEIGHT)])
        .flex(Flex::Center)
        .areas(area);
    let [board_area] = Layout::horizontal([Constraint::Length(BOARD_WIDTH)])
        .flex(Flex::Center)
        .areas(board_area);

    let rule_style = Style::default().fg(Color::DarkGray);
    let row_areas = Layout::vertical([
        Constraint::Length(CELL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CELL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CELL_HEIGHT),
    ])
    .split(board_area);

    for row in 0..3 {
        let column_areas = Layout::horizontal([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(row_areas[row * 2]);

        for column in 0..3 {
            if let Ok(pos) = Position::from_coordinates(row, column) {
                draw_cell(frame, column_areas[column * 2], app, pos);
            }
            if column < 2 {
                let rule = vec![Line::from("│"); CELL_HEIGHT as usize];
                frame.render_widget(
                    Paragraph::new(rule).style(rule_style),
                    column_areas[column * 2 + 1],
                );
            }
        }

        if row < 2 {
            let rule = vec!["─".repeat(CELL_WIDTH as usize); 3].join("┼");
            frame.render_widget(
                Paragraph::new(rule).style(rule_style),
                row_areas[row * 2 + 1],
            );
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if app.is_highlighted(pos) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && app.is_interactive() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the three-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::Screen;
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_core::{Board, Status};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_marks_and_status() {
        let mut app = App::new();
        let mut board = Board::new();
        board.set(Position::TopLeft, Mark::X.into()).unwrap();
        board.set(Position::Center, Mark::O.into()).unwrap();
        app.draw_board(&board);
        app.update_status(&Status::Turn("Player 1".into()));

        let screen = render(&app);
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains('X'));
        assert!(screen.contains('O'));
        assert!(screen.contains("Player 1's turn"));
        // Open squares show their keypad number.
        assert!(screen.contains('9'));
    }

    #[test]
    fn test_board_grid_is_centered() {
        let app = App::new();
        let screen = render(&app);
        let rule = "─────────┼─────────┼─────────";
        let rows: Vec<String> = screen
            .chars()
            .collect::<Vec<_>>()
            .chunks(60)
            .map(|row| row.iter().collect())
            .collect();

        let rules: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.contains(rule))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(rules.len(), 2);
        // Three cell rows plus a rule separate the two horizontal rules.
        assert_eq!(rules[1] - rules[0], 4);

        let left = rows[rules[0]].chars().take_while(|c| *c == ' ').count();
        let right = rows[rules[0]].chars().rev().take_while(|c| *c == ' ').count();
        assert!(left.abs_diff(right) <= 1);
    }
}
