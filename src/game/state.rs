use super::{win, Board, Player, COLS};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Tie,
}

/// An accepted move and the outcome it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
    pub player: Player,
    pub outcome: Outcome,
}

/// The authoritative game: board, whose turn it is, and the outcome.
///
/// All mutation goes through [`GameState::drop_disc`] (or its fallible twin)
/// and [`GameState::new_game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    outcome: Outcome,
    moves: usize,
}

impl GameState {
    /// Create initial game state
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            turn: Player::First,
            outcome: Outcome::InProgress,
            moves: 0,
        }
    }

    /// Throw away the current game and start over with `First` to move.
    pub fn new_game(&mut self) {
        *self = GameState::new();
        tracing::info!("new game started");
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Result so far; `InProgress` until a win or a full board
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Number of discs placed so far
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Columns that would accept a disc right now (none once the game is over)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Drop the current player's disc into `column`.
    ///
    /// Rejected moves are ignored: the state is left untouched and `None` is
    /// returned. Use [`GameState::try_drop_disc`] to learn why.
    pub fn drop_disc(&mut self, column: usize) -> Option<Placement> {
        match self.try_drop_disc(column) {
            Ok(placement) => Some(placement),
            Err(e) => {
                tracing::debug!(column, error = %e, "move ignored");
                None
            }
        }
    }

    /// Drop the current player's disc into `column`, reporting why a move
    /// was rejected.
    pub fn try_drop_disc(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        let player = self.turn;
        let row = self.board.drop_disc(column, player)?;
        self.moves += 1;
        tracing::debug!(%player, column, row, "disc dropped");

        let candidate = win::evaluate(&self.board, column, row, player);
        if candidate != Outcome::InProgress {
            self.outcome = candidate;
        } else if self.board.is_full() {
            self.outcome = Outcome::Tie;
        } else {
            self.turn = player.other();
        }

        if self.is_over() {
            tracing::info!(outcome = ?self.outcome, moves = self.moves, "game over");
        }

        Ok(Placement {
            column,
            row,
            player,
            outcome: self.outcome,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
