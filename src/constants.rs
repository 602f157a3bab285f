//! Constants for board geometry, match rules, and opponent tuning.
//!
//! The board size is fixed: every rule in the engine assumes a 5x6 grid.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows on the board.
pub const ROWS: usize = 5;

/// Number of columns on the board.
pub const COLS: usize = 6;

/// Total number of cells.
pub const CELLS: usize = ROWS * COLS;

/// Length of the run that wins a round.
pub const WIN_LENGTH: usize = 5;

// =============================================================================
// Match Rules
// =============================================================================

/// Round wins needed to take the match.
pub const MATCH_THRESHOLD: u32 = 5;

// =============================================================================
// Opponent Parameters
// =============================================================================

/// Probability that the medium opponent ignores the center/border preference
/// and picks from every empty cell.
pub const MEDIUM_RANDOM_PROB: f64 = 0.7;

/// The single interior cell the medium opponent favours.
pub const CENTER: (usize, usize) = (2, 2);

// =============================================================================
// Console Timing
// =============================================================================

/// Default pause (ms) before the console plays the computer's move.
pub const OPPONENT_DELAY_MS: u64 = 500;

/// Default pause (ms) before the console starts the next round.
pub const ROUND_RESET_DELAY_MS: u64 = 1000;
