use crate::constants::{COLS, ROWS};

/// Errors surfaced by the game engine.
///
/// Every error is reported by the call that triggered it; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate ({row}, {col}) is outside the {}x{} board", ROWS, COLS)]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("the round is already over")]
    GameAlreadyOver,

    #[error("no empty cell left for the opponent")]
    NoLegalMove,

    #[error("it is the computer's turn")]
    ComputerToMove,

    #[error("the computer is not the player to move")]
    NotComputerTurn,

    #[error("the match is over, start a new match")]
    MatchOver,

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = GameError::OutOfBounds { row: 5, col: 0 };
        assert_eq!(err.to_string(), "coordinate (5, 0) is outside the 5x6 board");
    }

    #[test]
    fn test_cell_occupied_display() {
        let err = GameError::CellOccupied { row: 1, col: 3 };
        assert_eq!(err.to_string(), "cell (1, 3) is already occupied");
    }
}
