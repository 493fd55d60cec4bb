//! TUI rendering with ratatui
//!
//! Board grid, feedback keyboard, messages and a status bar.

use super::app::{App, MessageStyle};
use crate::core::LetterStatus;
use crate::game::{Cell, GameStatus, KEYBOARD_ROWS, Key, MAX_ATTEMPTS, Row};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board + messages
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDDD")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tile colors for a letter status; `None` is an unscored cell
fn status_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn cell_span(cell: Cell, is_cursor: bool) -> Span<'static> {
    let letter = cell.letter.map_or('_', |c| c.to_ascii_uppercase());
    let mut style = status_style(cell.status);
    if is_cursor {
        style = style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED);
    }
    Span::styled(format!(" {letter} "), style)
}

fn board_line(row: Option<&Row>, cursor_column: Option<usize>) -> Line<'static> {
    let cells = row.map(Row::cells).unwrap_or_default();
    let mut spans = Vec::with_capacity(cells.len() * 2);

    for (i, cell) in cells.into_iter().enumerate() {
        spans.push(cell_span(cell, cursor_column == Some(i)));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let game = &app.game;
    let cursor = game.cursor();
    let rows = game.board().rows();

    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for index in 0..MAX_ATTEMPTS {
        let cursor_column = (index == cursor.row).then_some(cursor.column).flatten();
        lines.push(board_line(rows.get(index), cursor_column));
        lines.push(Line::default());
    }

    let (title, color) = match game.status() {
        GameStatus::InProgress => (" Board ".to_string(), Color::White),
        GameStatus::Won => (" 🎉 Solved! ".to_string(), Color::Green),
        GameStatus::Lost => (
            format!(" The word was {} ", game.secret().text().to_uppercase()),
            Color::Red,
        ),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );

    f.render_widget(board, area);
}

fn render_keyboard<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let feedback = app.game.feedback();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|key| {
                    let span = match *key {
                        Key::Letter(letter) => Span::styled(
                            format!(" {} ", char::from(letter).to_ascii_uppercase()),
                            status_style(feedback.get(letter)),
                        ),
                        Key::Enter => Span::styled(" ENTER ", Style::default().fg(Color::Cyan)),
                        Key::Delete => Span::styled(" DEL ", Style::default().fg(Color::Cyan)),
                    };
                    [span, Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempt_text = format!(
        "Attempt: {}/{MAX_ATTEMPTS}",
        (app.game.cursor().row + 1).min(MAX_ATTEMPTS)
    );
    f.render_widget(
        Paragraph::new(attempt_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.max_streak
    );
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if app.game.status().is_finished() {
        "n: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Bksp: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
