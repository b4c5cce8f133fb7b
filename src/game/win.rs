//! Four-in-a-row detection around a freshly placed disc.
//!
//! Everything here is a pure function of a board snapshot: the detector
//! keeps no state and never touches the board it is given.

use super::{Board, Cell, Outcome, Player};

/// One of the four line directions a winning run can lie on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Down-right / up-left (`\`).
    DiagonalDown,
    /// Down-left / up-right (`/`).
    DiagonalUp,
}

impl Axis {
    /// Axes in evaluation order.
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// `(column, row)` steps walked away from the placed disc.
    ///
    /// Vertical only looks down: nothing can sit above a disc at the moment
    /// it lands.
    pub fn rays(self) -> &'static [(isize, isize)] {
        match self {
            Axis::Vertical => &[(0, -1)],
            Axis::Horizontal => &[(-1, 0), (1, 0)],
            Axis::DiagonalDown => &[(1, -1), (-1, 1)],
            Axis::DiagonalUp => &[(-1, -1), (1, 1)],
        }
    }

    /// Whether `run` matching neighbours (not counting the placed disc)
    /// complete four in a row on this axis.
    fn completes(self, run: usize) -> bool {
        match self {
            Axis::Vertical => run == 3,
            _ => run >= 3,
        }
    }
}

/// Count contiguous `player` discs starting next to `(column, row)` and
/// stepping by `direction` until the edge of the board or any other cell.
pub fn count_adjacent(
    board: &Board,
    column: usize,
    row: usize,
    direction: (isize, isize),
    player: Player,
) -> usize {
    let (dc, dr) = direction;
    let mut c = column as isize + dc;
    let mut r = row as isize + dr;
    let mut count = 0;

    while board.cell(c, r) == Some(Cell::Disc(player)) {
        count += 1;
        c += dc;
        r += dr;
    }

    count
}

/// The first axis, in [`Axis::ALL`] order, on which the disc `player` just
/// placed at `(column, row)` completes four in a row.
pub fn winning_axis(board: &Board, column: usize, row: usize, player: Player) -> Option<Axis> {
    Axis::ALL.into_iter().find(|axis| {
        let run: usize = axis
            .rays()
            .iter()
            .map(|&direction| count_adjacent(board, column, row, direction, player))
            .sum();
        axis.completes(run)
    })
}

/// Evaluate the move `player` just made at `(column, row)`.
///
/// Returns `Win(player)` or `InProgress`; a full board is the caller's
/// concern.
pub fn evaluate(board: &Board, column: usize, row: usize, player: Player) -> Outcome {
    match winning_axis(board, column, row, player) {
        Some(_) => Outcome::Win(player),
        None => Outcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop discs column by column; returns the row of the last drop.
    fn build(board: &mut Board, drops: &[(usize, Player)]) -> usize {
        let mut row = 0;
        for &(column, player) in drops {
            row = board.drop_disc(column, player).unwrap();
        }
        row
    }

    const F: Player = Player::First;
    const S: Player = Player::Second;

    #[test]
    fn test_count_adjacent_stops_at_edge() {
        let mut board = Board::new();
        build(&mut board, &[(0, F), (1, F), (2, F)]);

        assert_eq!(count_adjacent(&board, 2, 0, (-1, 0), F), 2);
        assert_eq!(count_adjacent(&board, 0, 0, (-1, 0), F), 0);
        assert_eq!(count_adjacent(&board, 0, 0, (1, 0), F), 2);
    }

    #[test]
    fn test_count_adjacent_stops_at_opponent_and_empty() {
        let mut board = Board::new();
        build(&mut board, &[(0, F), (1, S), (2, F), (3, F)]);

        assert_eq!(count_adjacent(&board, 3, 0, (-1, 0), F), 1);
        assert_eq!(count_adjacent(&board, 3, 0, (1, 0), F), 0);
        assert_eq!(count_adjacent(&board, 3, 0, (0, 1), F), 0);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        let row = build(&mut board, &[(3, S), (3, F), (3, F), (3, F), (3, F)]);

        assert_eq!(row, 4);
        assert_eq!(evaluate(&board, 3, row, F), Outcome::Win(F));
        assert_eq!(winning_axis(&board, 3, row, F), Some(Axis::Vertical));
    }

    #[test]
    fn test_vertical_three_is_not_a_win() {
        let mut board = Board::new();
        let row = build(&mut board, &[(5, F), (5, F), (5, F)]);
        assert_eq!(evaluate(&board, 5, row, F), Outcome::InProgress);
    }

    #[test]
    fn test_vertical_requires_exactly_three_below() {
        let mut board = Board::new();
        let row = build(&mut board, &[(2, F), (2, F), (2, F), (2, F), (2, F)]);

        assert_eq!(count_adjacent(&board, 2, row, (0, -1), F), 4);
        assert_eq!(winning_axis(&board, 2, row, F), None);
    }

    #[test]
    fn test_horizontal_win_from_either_end() {
        let mut board = Board::new();
        let row = build(&mut board, &[(0, F), (1, F), (2, F), (3, F)]);
        assert_eq!(evaluate(&board, 3, row, F), Outcome::Win(F));
        assert_eq!(evaluate(&board, 0, row, F), Outcome::Win(F));
    }

    #[test]
    fn test_horizontal_win_filling_the_gap() {
        let mut board = Board::new();
        let row = build(&mut board, &[(2, S), (3, S), (5, S), (4, S)]);

        assert_eq!(row, 0);
        assert_eq!(winning_axis(&board, 4, row, S), Some(Axis::Horizontal));
    }

    #[test]
    fn test_diagonal_up_win() {
        // (0,0) (1,1) (2,2) (3,3)
        let mut board = Board::new();
        let row = build(
            &mut board,
            &[
                (0, F),
                (1, S),
                (1, F),
                (2, S),
                (2, S),
                (2, F),
                (3, S),
                (3, S),
                (3, S),
                (3, F),
            ],
        );

        assert_eq!(row, 3);
        assert_eq!(winning_axis(&board, 3, row, F), Some(Axis::DiagonalUp));
    }

    #[test]
    fn test_diagonal_down_win() {
        // (6,0) (5,1) (4,2) (3,3)
        let mut board = Board::new();
        let row = build(
            &mut board,
            &[
                (6, F),
                (5, S),
                (5, F),
                (4, S),
                (4, S),
                (4, F),
                (3, S),
                (3, S),
                (3, S),
                (3, F),
            ],
        );

        assert_eq!(row, 3);
        assert_eq!(winning_axis(&board, 3, row, F), Some(Axis::DiagonalDown));
    }

    #[test]
    fn test_diagonal_win_through_middle() {
        let mut board = Board::new();
        build(
            &mut board,
            &[
                (0, F),
                (1, S),
                (2, S),
                (2, S),
                (2, F),
                (3, S),
                (3, S),
                (3, S),
                (3, F),
            ],
        );
        let row = board.drop_disc(1, F).unwrap();

        assert_eq!(row, 1);
        assert_eq!(evaluate(&board, 1, row, F), Outcome::Win(F));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        let row = build(&mut board, &[(0, F), (1, F), (2, F)]);
        assert_eq!(evaluate(&board, 1, row, F), Outcome::InProgress);
    }

    #[test]
    fn test_opponent_run_does_not_count() {
        let mut board = Board::new();
        let row = build(&mut board, &[(0, S), (1, S), (2, S), (3, F)]);
        assert_eq!(evaluate(&board, 3, row, F), Outcome::InProgress);
    }

    #[test]
    fn test_vertical_checked_before_horizontal() {
        let mut board = Board::new();
        build(&mut board, &[(0, F), (1, F), (2, F)]);
        build(&mut board, &[(3, F), (3, F), (3, F)]);
        // Bottom row already holds four; the top of column 3 completes a
        // vertical run as well.
        let row = board.drop_disc(3, F).unwrap();
        assert_eq!(winning_axis(&board, 3, row, F), Some(Axis::Vertical));

        assert_eq!(winning_axis(&board, 3, 0, F), Some(Axis::Horizontal));
    }

    #[test]
    fn test_evaluate_does_not_touch_board() {
        let mut board = Board::new();
        let row = build(&mut board, &[(0, F), (1, F), (2, F), (3, F)]);
        let snapshot = board;

        evaluate(&board, 3, row, F);
        assert_eq!(board, snapshot);
    }
}
