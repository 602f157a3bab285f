//! Round state machine.
//!
//! [`TurnController`] owns the board and the round state and is their only
//! mutator. A move is processed completely (place, win check, draw check,
//! turn flip) before the call returns. It never asks the computer for a
//! move; callers do that after observing whose turn it is.

use tracing::{debug, instrument};

use crate::board::{Board, Coord, Player};
use crate::error::GameError;
use crate::win::check_win;

/// Status of the current round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won(Player),
    Drawn,
}

impl RoundStatus {
    pub fn is_terminal(self) -> bool {
        self != RoundStatus::InProgress
    }
}

/// Whose turn it is and whether the round has ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    pub active: Player,
    pub status: RoundStatus,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            active: Player::X,
            status: RoundStatus::InProgress,
        }
    }
}

/// What a successful move did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub coord: Coord,
    pub player: Player,
    pub status: RoundStatus,
}

#[derive(Clone, Debug, Default)]
pub struct TurnController {
    board: Board,
    state: RoundState,
}

impl TurnController {
    /// Fresh round: empty board, X to move.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn active_player(&self) -> Player {
        self.state.active
    }

    pub fn status(&self) -> RoundStatus {
        self.state.status
    }

    /// Place the active player's stone at `(row, col)`.
    ///
    /// On error neither the board nor the round state is touched.
    #[instrument(level = "debug", skip(self), fields(player = %self.state.active))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        let coord = Coord::new(row, col)?;
        if self.state.status.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.board.at(coord).is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }

        let player = self.state.active;
        self.board.put(coord, player.cell());

        // Win takes precedence over draw when the last cell completes a line.
        if check_win(&self.board, row, col, player)? {
            self.state.status = RoundStatus::Won(player);
        } else if self.board.is_full() {
            self.state.status = RoundStatus::Drawn;
        } else {
            self.state.active = player.other();
        }

        debug!(%coord, status = ?self.state.status, "move applied");
        Ok(MoveOutcome {
            coord,
            player,
            status: self.state.status,
        })
    }

    /// Clear the board and start a new round with X to move.
    pub fn reset_round(&mut self) {
        self.board.reset();
        self.state = RoundState::default();
    }
}
