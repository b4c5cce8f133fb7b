use crate::config::PlayersConfig;
use crate::game::{Cell, GameState, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::game_view::marker_visible;

/// Board lines: column markers, framed grid (top row first), selection arrow.
pub fn board_lines(
    game_state: &GameState,
    players: &PlayersConfig,
    selected_column: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Drop markers, hidden over full columns and once the game is decided
    let mut marker_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for column in 0..COLS {
        if !marker_visible(game_state, column) {
            marker_line.push(Span::raw("   "));
        } else if column == selected_column {
            marker_line.push(Span::styled(
                format!(" {} ", column + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            marker_line.push(Span::raw(format!(" {} ", column + 1)));
        }
    }
    marker_line.push(Span::raw(" ")); // Suffix padding to match "║"
    lines.push(Line::from(marker_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(COLS * 3))));

    let board = game_state.board();
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];
        for column in 0..COLS {
            let (symbol, color) = match board.get(column, row) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Disc(player) => (" ● ", players.style(player).color()),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(COLS * 3))));

    if !game_state.is_over() {
        let mut indicator_line = vec![Span::raw("   ")];
        for column in 0..COLS {
            if column == selected_column {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw(" "));
        lines.push(Line::from(indicator_line));
    }

    lines
}
