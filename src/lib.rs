//! connect-five: a five-in-a-row engine for a 5x6 board.
//!
//! Two players, X and O, alternate placing stones; the first to line up five
//! horizontally, vertically or diagonally wins the round, and the first to
//! five round wins takes the match. O can be played by the computer at one of
//! three difficulties.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, match threshold, opponent tuning
//! - [`board`] - Grid, cells, players and coordinates
//! - [`win`] - Win detection through a placed stone
//! - [`turn`] - Round state machine
//! - [`opponent`] - Computer move selection
//! - [`score`] - Match scoring
//! - [`game`] - Session facade and outbound events
//! - [`console`] - Text console front end
//!
//! ## Example
//!
//! ```
//! use connect_five::turn::{RoundStatus, TurnController};
//! use connect_five::board::Player;
//!
//! let mut turns = TurnController::new();
//! for col in 0..4 {
//!     turns.apply_move(0, col).unwrap(); // X
//!     turns.apply_move(1, col).unwrap(); // O
//! }
//! let outcome = turns.apply_move(0, 4).unwrap();
//! assert_eq!(outcome.status, RoundStatus::Won(Player::X));
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod opponent;
pub mod score;
pub mod turn;
pub mod win;

pub use error::GameError;
