use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Disc(Player),
}

/// Column-major grid. Slot 0 of every column is the bottom, and the
/// occupied slots of a column are always contiguous from slot 0 upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    columns: [[Cell; ROWS]; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            columns: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the bottom, row 5 is the top.
    ///
    /// # Panics
    ///
    /// Panics if `column >= COLS` or `row >= ROWS`. Use [`Board::cell`] for a
    /// checked lookup.
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.columns[column][row]
    }

    /// Like [`Board::get`], but `None` for coordinates off the grid.
    pub fn cell(&self, column: isize, row: isize) -> Option<Cell> {
        let column = usize::try_from(column).ok()?;
        let row = usize::try_from(row).ok()?;
        self.columns.get(column)?.get(row).copied()
    }

    /// Number of discs in a column, which is also the row the next disc lands on
    ///
    /// # Panics
    ///
    /// Panics if `column >= COLS`.
    pub fn height(&self, column: usize) -> usize {
        self.columns[column]
            .iter()
            .take_while(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        self.columns[column][ROWS - 1] != Cell::Empty
    }

    /// Drop a disc in a column, returns the row where it landed
    pub fn drop_disc(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull(column));
        }

        let row = self.height(column);
        self.columns[column][row] = Cell::Disc(player);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| self.is_column_full(column))
    }

    /// Columns left to right, each bottom slot first.
    pub fn columns(&self) -> impl Iterator<Item = &[Cell; ROWS]> {
        self.columns.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
