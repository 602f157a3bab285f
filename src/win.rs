//! Win detection through a just-played cell.
//!
//! A move wins when the stone it placed is part of a run of at least
//! [`WIN_LENGTH`] same-player cells along one of the four axes. Only lines
//! through the placed stone are examined, so the check is local and cheap.

use tracing::instrument;

use crate::board::{Board, Coord, Player};
use crate::constants::WIN_LENGTH;
use crate::error::GameError;

/// A line direction, given by its positive step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Axis {
    /// Evaluation order of the detector.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Positive step `(d_row, d_col)` along this axis.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (-1, 1),
        }
    }
}

/// Count consecutive `player` cells starting one step away from `from`.
fn count_direction(board: &Board, from: Coord, d_row: isize, d_col: isize, player: Player) -> usize {
    let target = player.cell();
    let mut count = 0;
    let mut cur = from;
    while let Some(next) = cur.offset(d_row, d_col) {
        if board.at(next) != target {
            break;
        }
        count += 1;
        cur = next;
    }
    count
}

/// Length of the `player` run through `c` along `axis`, counting `c` itself.
pub fn run_length(board: &Board, c: Coord, player: Player, axis: Axis) -> usize {
    let (dr, dc) = axis.delta();
    1 + count_direction(board, c, dr, dc, player) + count_direction(board, c, -dr, -dc, player)
}

/// First axis (in [`Axis::ALL`] order) on which `c` is part of a winning run.
///
/// `c` is assumed to already hold `player`'s stone.
pub fn winning_axis(board: &Board, c: Coord, player: Player) -> Option<Axis> {
    Axis::ALL
        .into_iter()
        .find(|&axis| run_length(board, c, player, axis) >= WIN_LENGTH)
}

/// Does the stone at `(row, col)` complete a line of five for `player`?
#[instrument(level = "trace", skip(board))]
pub fn check_win(board: &Board, row: usize, col: usize, player: Player) -> Result<bool, GameError> {
    let c = Coord::new(row, col)?;
    Ok(winning_axis(board, c, player).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    /// Board with `len` consecutive `player` stones starting at `start` along `axis`.
    fn board_with_run(start: (usize, usize), axis: Axis, len: usize, player: Player) -> Board {
        let mut board = Board::new();
        let (dr, dc) = axis.delta();
        let mut c = Coord::new(start.0, start.1).unwrap();
        board.put(c, player.cell());
        for _ in 1..len {
            c = c.offset(dr, dc).unwrap();
            board.put(c, player.cell());
        }
        board
    }

    #[test]
    fn test_horizontal_runs() {
        for (len, wins) in [(3, false), (4, false), (5, true), (6, true)] {
            let board = board_with_run((2, 0), Axis::Horizontal, len, Player::X);
            for col in 0..len {
                assert_eq!(
                    check_win(&board, 2, col, Player::X),
                    Ok(wins),
                    "len {len}, col {col}"
                );
            }
        }
    }

    #[test]
    fn test_vertical_runs() {
        for (len, wins) in [(3, false), (4, false), (5, true)] {
            let board = board_with_run((0, 3), Axis::Vertical, len, Player::O);
            for row in 0..len {
                assert_eq!(check_win(&board, row, 3, Player::O), Ok(wins), "len {len}");
            }
        }
    }

    #[test]
    fn test_diagonal_down_runs() {
        for start in [(0, 0), (0, 1)] {
            for (len, wins) in [(3, false), (4, false), (5, true)] {
                let board = board_with_run(start, Axis::DiagonalDown, len, Player::X);
                let c = Coord::new(start.0 + len - 1, start.1 + len - 1).unwrap();
                assert_eq!(check_win(&board, c.row(), c.col(), Player::X), Ok(wins));
            }
        }
    }

    #[test]
    fn test_diagonal_up_runs() {
        for start in [(4, 0), (4, 1)] {
            for (len, wins) in [(3, false), (4, false), (5, true)] {
                let board = board_with_run(start, Axis::DiagonalUp, len, Player::O);
                // Check from the middle of the run.
                let mid = len / 2;
                let c = Coord::new(start.0 - mid, start.1 + mid).unwrap();
                assert_eq!(check_win(&board, c.row(), c.col(), Player::O), Ok(wins));
            }
        }
    }

    #[test]
    fn test_other_player_stones_do_not_count() {
        let mut board = board_with_run((1, 0), Axis::Horizontal, 4, Player::X);
        board.put(Coord::new(1, 4).unwrap(), Cell::O);
        assert_eq!(check_win(&board, 1, 3, Player::X), Ok(false));
        assert_eq!(check_win(&board, 1, 4, Player::O), Ok(false));
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = Board::new();
        for col in [0, 1, 3, 4, 5] {
            board.set(0, col, Cell::X).unwrap();
        }
        assert_eq!(check_win(&board, 0, 0, Player::X), Ok(false));
        board.set(0, 2, Cell::X).unwrap();
        assert_eq!(check_win(&board, 0, 2, Player::X), Ok(true));
    }

    #[test]
    fn test_run_length_and_axis() {
        let board = board_with_run((0, 1), Axis::DiagonalDown, 5, Player::X);
        let c = Coord::new(2, 3).unwrap();
        assert_eq!(run_length(&board, c, Player::X, Axis::DiagonalDown), 5);
        assert_eq!(run_length(&board, c, Player::X, Axis::Horizontal), 1);
        assert_eq!(winning_axis(&board, c, Player::X), Some(Axis::DiagonalDown));
    }

    #[test]
    fn test_check_win_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            check_win(&board, 0, 6, Player::X),
            Err(GameError::OutOfBounds { row: 0, col: 6 })
        );
    }
}
