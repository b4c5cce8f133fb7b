use crate::config::PlayersConfig;
use crate::error::MoveError;
use crate::game::{GameState, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::game_view::{self, View};

pub struct App {
    game_state: GameState,
    players: PlayersConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(players: PlayersConfig) -> Self {
        App {
            game_state: GameState::new(),
            players,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < COLS {
                    self.selected_column = column;
                }
                self.drop_disc(column);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.game_state.new_game();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a disc for the player to move
    fn drop_disc(&mut self, column: usize) {
        match self.game_state.try_drop_disc(column) {
            // GameState logs the move and any result
            Ok(_) => {}
            // Rejected moves leave the game untouched; just tell the player.
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("No such column!".to_string());
            }
            Err(MoveError::GameAlreadyOver) => {
                self.message = Some("Game over! Press 'r' to play again.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let view = View {
            game_state: &self.game_state,
            players: &self.players,
            selected_column: self.selected_column,
            message: self.message.as_deref(),
        };
        game_view::render(frame, &view);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(PlayersConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Outcome, Player, ROWS};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_starts_in_middle() {
        let app = App::default();
        assert_eq!(app.selected_column(), 3);
        assert!(!app.should_quit());
        assert_eq!(app.game_state(), &GameState::new());
    }

    #[test]
    fn test_selection_clamped_to_board() {
        let mut app = App::default();
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), COLS - 1);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = App::default();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game_state().board().get(4, 0), Cell::Disc(Player::First));
        assert_eq!(app.game_state().turn(), Player::Second);
    }

    #[test]
    fn test_number_keys_drop_directly() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('7'));

        let board = app.game_state().board();
        assert_eq!(board.get(0, 0), Cell::Disc(Player::First));
        assert_eq!(board.get(6, 0), Cell::Disc(Player::Second));
        assert_eq!(app.selected_column(), 6);
    }

    #[test]
    fn test_out_of_range_number_key_is_ignored() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('9'));

        assert_eq!(app.game_state(), &GameState::new());
        assert_eq!(app.message(), Some("No such column!"));
    }

    #[test]
    fn test_full_column_reports_message() {
        let mut app = App::default();
        for _ in 0..ROWS {
            press(&mut app, KeyCode::Char(' '));
        }
        let before = app.game_state().clone();

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state(), &before);
        assert_eq!(app.message(), Some("Column is full!"));
    }

    #[test]
    fn test_restart_after_win() {
        let mut app = App::default();
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.game_state().outcome(), Outcome::Win(Player::First));
        // the winning drop itself is not a rejection
        assert_eq!(app.message(), None);

        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.message(), Some("Game over! Press 'r' to play again."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state(), &GameState::new());
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }
}
