//! Session facade tying the round, the score and the computer opponent together.
//!
//! Every inbound call returns the events it produced, in order, so a
//! presentation layer can redraw without reaching into engine state.
//!
//! ## Example
//!
//! ```
//! use connect_five::game::{Game, GameEvent};
//! use connect_five::opponent::{Difficulty, OpponentConfig};
//!
//! let mut game = Game::with_seed(1);
//! game.start_match(OpponentConfig::computer(Difficulty::Hard));
//! game.player_move_at(2, 2).unwrap();
//! assert!(game.is_computer_turn());
//! let events = game.request_opponent_move().unwrap();
//! assert!(matches!(events[0], GameEvent::BoardChanged(_)));
//! ```

use tracing::{debug, info};

use crate::board::{Board, Player};
use crate::error::GameError;
use crate::opponent::{OpponentConfig, OpponentPolicy};
use crate::score::{MatchScorer, Score};
use crate::turn::{MoveOutcome, RoundState, RoundStatus, TurnController};

/// The computer always plays second.
pub const COMPUTER_PLAYER: Player = Player::O;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundEnd {
    Win,
    Draw,
}

/// Notifications for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Snapshot of the grid after it changed.
    BoardChanged(Board),
    RoundEnded {
        reason: RoundEnd,
        winner: Option<Player>,
    },
    ScoreChanged(Score),
    MatchEnded(Player),
}

pub struct Game {
    turns: TurnController,
    scorer: MatchScorer,
    policy: OpponentPolicy,
    config: OpponentConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Human-vs-human game with an OS-seeded opponent policy.
    pub fn new() -> Self {
        Self::with_policy(OpponentPolicy::new())
    }

    /// Game whose computer opponent is seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_policy(OpponentPolicy::with_seed(seed))
    }

    pub fn with_policy(policy: OpponentPolicy) -> Self {
        Self {
            turns: TurnController::new(),
            scorer: MatchScorer::new(),
            policy,
            config: OpponentConfig::human(),
        }
    }

    pub fn board(&self) -> &Board {
        self.turns.board()
    }

    pub fn round_state(&self) -> RoundState {
        self.turns.state()
    }

    pub fn score(&self) -> Score {
        self.scorer.current_score()
    }

    pub fn config(&self) -> OpponentConfig {
        self.config
    }

    pub fn is_match_over(&self) -> bool {
        self.scorer.is_match_over()
    }

    /// True when the round is live and the computer is the player to move.
    pub fn is_computer_turn(&self) -> bool {
        self.config.enabled
            && self.turns.status() == RoundStatus::InProgress
            && self.turns.active_player() == COMPUTER_PLAYER
    }

    /// Begin a new match against the given opponent, clearing score and board.
    pub fn start_match(&mut self, config: OpponentConfig) -> Vec<GameEvent> {
        info!(opponent = %config, "match started");
        self.config = config;
        self.scorer.reset_match();
        self.turns.reset_round();
        vec![
            GameEvent::BoardChanged(*self.turns.board()),
            GameEvent::ScoreChanged(self.scorer.current_score()),
        ]
    }

    /// A human move at `(row, col)` for the active player.
    pub fn player_move_at(&mut self, row: usize, col: usize) -> Result<Vec<GameEvent>, GameError> {
        if self.is_computer_turn() {
            return Err(GameError::ComputerToMove);
        }
        self.play(row, col)
    }

    /// Let the computer pick and play its move.
    pub fn request_opponent_move(&mut self) -> Result<Vec<GameEvent>, GameError> {
        if self.turns.status().is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.is_computer_turn() {
            return Err(GameError::NotComputerTurn);
        }

        // The policy probes a scratch copy; only the controller writes the real board.
        let mut scratch = *self.turns.board();
        let empty = scratch.empty_cells();
        let c = self.policy.choose_move(
            &mut scratch,
            &empty,
            COMPUTER_PLAYER,
            self.config.difficulty,
        )?;
        self.play(c.row(), c.col())
    }

    /// Start the next round of the current match.
    pub fn reset_round(&mut self) -> Result<Vec<GameEvent>, GameError> {
        if self.scorer.is_match_over() {
            return Err(GameError::MatchOver);
        }
        self.turns.reset_round();
        Ok(vec![GameEvent::BoardChanged(*self.turns.board())])
    }

    /// Zero the score and start over with the same opponent.
    pub fn reset_match(&mut self) -> Vec<GameEvent> {
        self.start_match(self.config)
    }

    fn play(&mut self, row: usize, col: usize) -> Result<Vec<GameEvent>, GameError> {
        let outcome = self.turns.apply_move(row, col)?;
        let mut events = vec![GameEvent::BoardChanged(*self.turns.board())];
        self.settle(outcome, &mut events);
        Ok(events)
    }

    fn settle(&mut self, outcome: MoveOutcome, events: &mut Vec<GameEvent>) {
        match outcome.status {
            RoundStatus::InProgress => {
                debug!(next = %self.turns.active_player(), "turn passed");
            }
            RoundStatus::Won(winner) => {
                self.scorer.record_win(winner);
                let score = self.scorer.current_score();
                info!(%winner, x = score.x, o = score.o, "round won");
                events.push(GameEvent::RoundEnded {
                    reason: RoundEnd::Win,
                    winner: Some(winner),
                });
                events.push(GameEvent::ScoreChanged(score));
                if let Some(champion) = self.scorer.leader() {
                    info!(%champion, "match over");
                    events.push(GameEvent::MatchEnded(champion));
                }
            }
            RoundStatus::Drawn => {
                info!("round drawn");
                events.push(GameEvent::RoundEnded {
                    reason: RoundEnd::Draw,
                    winner: None,
                });
            }
        }
    }
}
