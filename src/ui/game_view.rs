use crate::config::PlayersConfig;
use crate::game::{GameState, Outcome, COLS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::board_lines;

/// Everything the view needs for one frame.
pub struct View<'a> {
    pub game_state: &'a GameState,
    pub players: &'a PlayersConfig,
    pub selected_column: usize,
    pub message: Option<&'a str>,
}

/// Turn indicator or result text.
pub fn status_text(game_state: &GameState, players: &PlayersConfig) -> String {
    match game_state.outcome() {
        Outcome::InProgress => format!(
            "{}'s Turn",
            players.style(game_state.turn()).name.to_uppercase()
        ),
        Outcome::Win(player) => format!("{} Wins!", players.style(player).name.to_uppercase()),
        Outcome::Tie => "It's a TIE!".to_string(),
    }
}

/// Whether the drop marker over `column` is offered.
pub fn marker_visible(game_state: &GameState, column: usize) -> bool {
    column < COLS && !game_state.is_over() && !game_state.board().is_column_full(column)
}

/// Whether the "play again" prompt is shown.
pub fn play_again_visible(game_state: &GameState) -> bool {
    game_state.is_over()
}

/// Message line: the latest hint wins over the play-again prompt.
pub fn message_text<'a>(view: &View<'a>) -> &'a str {
    match view.message {
        Some(message) => message,
        None if play_again_visible(view.game_state) => "Press R to play again",
        None => "",
    }
}

pub fn render(frame: &mut Frame, view: &View<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Board
            Constraint::Length(3),  // Message
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, view, chunks[1]);
    render_message(frame, view, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, view: &View<'_>, area: Rect) {
    let color = match view.game_state.outcome() {
        Outcome::InProgress => view.players.style(view.game_state.turn()).color(),
        Outcome::Win(player) => view.players.style(player).color(),
        Outcome::Tie => Color::White,
    };

    let header = Paragraph::new(status_text(view.game_state, view.players))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, view: &View<'_>, area: Rect) {
    let lines = board_lines(view.game_state, view.players, view.selected_column);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, view: &View<'_>, area: Rect) {
    let msg_widget = Paragraph::new(message_text(view))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  1-7: Drop in column  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
