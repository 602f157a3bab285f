//! Computer opponent move selection.
//!
//! Three tiers:
//! - `Easy`: uniform random over the empty cells.
//! - `Medium`: mostly random, sometimes restricted to the center and border.
//! - `Hard`: one-ply lookahead that takes an immediate win, otherwise blocks
//!   the opponent's immediate win, otherwise plays randomly.
//!
//! The policy never plays a move itself; it returns a coordinate for the
//! turn controller to apply.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::board::{Board, Coord, Player};
use crate::constants::{CENTER, MEDIUM_RANDOM_PROB};
use crate::error::GameError;
use crate::win::winning_axis;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Opponent setup for a match. Fixed once the match starts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OpponentConfig {
    pub enabled: bool,
    pub difficulty: Difficulty,
}

impl OpponentConfig {
    /// Two human players.
    pub fn human() -> Self {
        Self::default()
    }

    /// Human against the computer at `difficulty`.
    pub fn computer(difficulty: Difficulty) -> Self {
        Self {
            enabled: true,
            difficulty,
        }
    }
}

/// Parses `human`, `easy`, `medium` or `hard`.
impl FromStr for OpponentConfig {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("human") {
            return Ok(Self::human());
        }
        s.parse().map(Self::computer)
    }
}

impl fmt::Display for OpponentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "{}", self.difficulty)
        } else {
            f.write_str("human")
        }
    }
}

/// Move picker for the computer player.
pub struct OpponentPolicy {
    rng: fastrand::Rng,
}

impl Default for OpponentPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentPolicy {
    /// Policy seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Policy with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Pick a cell from `empty_cells` for `player`.
    ///
    /// `board` is only written to through scoped probes and is unchanged when
    /// this returns.
    pub fn choose_move(
        &mut self,
        board: &mut Board,
        empty_cells: &[Coord],
        player: Player,
        difficulty: Difficulty,
    ) -> Result<Coord, GameError> {
        if empty_cells.is_empty() {
            return Err(GameError::NoLegalMove);
        }

        let coord = match difficulty {
            Difficulty::Easy => self.random_move(empty_cells),
            Difficulty::Medium => self.medium_move(empty_cells),
            Difficulty::Hard => self.hard_move(board, empty_cells, player),
        };
        debug!(%player, %difficulty, %coord, "opponent chose move");
        Ok(coord)
    }

    fn random_move(&mut self, cells: &[Coord]) -> Coord {
        cells[self.rng.usize(..cells.len())]
    }

    fn medium_move(&mut self, empty_cells: &[Coord]) -> Coord {
        if self.rng.f64() <= MEDIUM_RANDOM_PROB {
            return self.random_move(empty_cells);
        }

        let center = Coord::new(CENTER.0, CENTER.1).ok();
        let preferred: Vec<Coord> = empty_cells
            .iter()
            .copied()
            .filter(|&c| Some(c) == center || c.is_border())
            .collect();

        if preferred.is_empty() {
            self.random_move(empty_cells)
        } else {
            self.random_move(&preferred)
        }
    }

    fn hard_move(&mut self, board: &mut Board, empty_cells: &[Coord], player: Player) -> Coord {
        if let Some(c) = find_winning_move(board, empty_cells, player) {
            debug!(%c, "taking immediate win");
            return c;
        }
        if let Some(c) = find_winning_move(board, empty_cells, player.other()) {
            debug!(%c, "blocking opponent win");
            return c;
        }
        self.random_move(empty_cells)
    }
}

/// First cell in `empty_cells` where a `player` stone would win at once.
pub fn find_winning_move(board: &mut Board, empty_cells: &[Coord], player: Player) -> Option<Coord> {
    empty_cells.iter().copied().find(|&c| {
        let probe = board.probe(c, player.cell());
        winning_axis(&probe, c, player).is_some()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn place(board: &mut Board, cells: &[(usize, usize)], value: Cell) {
        for &(r, c) in cells {
            board.set(r, c, value).unwrap();
        }
    }

    #[test]
    fn test_no_legal_move() {
        let mut policy = OpponentPolicy::with_seed(1);
        let mut board = Board::new();
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                policy.choose_move(&mut board, &[], Player::O, d),
                Err(GameError::NoLegalMove)
            );
        }
    }

    #[test]
    fn test_easy_picks_from_empty_cells() {
        let mut policy = OpponentPolicy::with_seed(7);
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (2, 3), (4, 5)], Cell::X);
        let empty = board.empty_cells();
        for _ in 0..200 {
            let c = policy
                .choose_move(&mut board, &empty, Player::O, Difficulty::Easy)
                .unwrap();
            assert!(empty.contains(&c));
        }
    }

    #[test]
    fn test_medium_favours_center_and_border() {
        let mut policy = OpponentPolicy::with_seed(42);
        let mut board = Board::new();
        let empty = board.empty_cells();
        let preferred = empty
            .iter()
            .filter(|c| c.is_border() || (c.row(), c.col()) == CENTER)
            .count();
        assert_eq!(preferred, 19);

        let trials = 4000;
        let mut hits = 0;
        for _ in 0..trials {
            let c = policy
                .choose_move(&mut board, &empty, Player::O, Difficulty::Medium)
                .unwrap();
            if c.is_border() || (c.row(), c.col()) == CENTER {
                hits += 1;
            }
        }
        // Expected share: 0.7 * 19/30 + 0.3 = 0.743, against 0.633 for pure random.
        let share = hits as f64 / trials as f64;
        assert!(share > 0.69 && share < 0.80, "share {share}");
    }

    #[test]
    fn test_medium_falls_back_when_preferred_cells_taken() {
        let mut policy = OpponentPolicy::with_seed(3);
        let mut board = Board::new();
        let only = [Coord::new(1, 1).unwrap(), Coord::new(3, 4).unwrap()];
        for _ in 0..100 {
            let c = policy
                .choose_move(&mut board, &only, Player::O, Difficulty::Medium)
                .unwrap();
            assert!(only.contains(&c));
        }
    }

    #[test]
    fn test_hard_takes_win() {
        let mut policy = OpponentPolicy::with_seed(5);
        let mut board = Board::new();
        place(&mut board, &[(3, 0), (3, 1), (3, 2), (3, 3)], Cell::O);
        // X's block at (0, 0) comes earlier in scan order, but O's own win wins out.
        place(&mut board, &[(0, 1), (0, 2), (0, 3), (0, 4)], Cell::X);
        let before = board;
        let empty = board.empty_cells();

        let c = policy
            .choose_move(&mut board, &empty, Player::O, Difficulty::Hard)
            .unwrap();
        assert_eq!(c, Coord::new(3, 4).unwrap());
        assert_eq!(board, before);
    }

    #[test]
    fn test_hard_blocks_row_threat() {
        let mut policy = OpponentPolicy::with_seed(11);
        let mut board = Board::new();
        place(&mut board, &[(1, 1), (1, 2), (1, 3), (1, 4)], Cell::X);
        let before = board;
        let empty = board.empty_cells();

        let c = policy
            .choose_move(&mut board, &empty, Player::O, Difficulty::Hard)
            .unwrap();
        assert!(c == Coord::new(1, 0).unwrap() || c == Coord::new(1, 5).unwrap());
        // Row-major scan reaches (1, 0) first.
        assert_eq!(c, Coord::new(1, 0).unwrap());
        assert_eq!(board, before);
    }

    #[test]
    fn test_hard_random_fallback_leaves_board_unchanged() {
        let mut policy = OpponentPolicy::with_seed(9);
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (2, 2)], Cell::X);
        place(&mut board, &[(4, 4)], Cell::O);
        let before = board;
        let empty = board.empty_cells();

        for _ in 0..50 {
            let c = policy
                .choose_move(&mut board, &empty, Player::O, Difficulty::Hard)
                .unwrap();
            assert!(empty.contains(&c));
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_find_winning_move_none() {
        let mut board = Board::new();
        let empty = board.empty_cells();
        assert_eq!(find_winning_move(&mut board, &empty, Player::X), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_config() {
        assert_eq!("human".parse::<OpponentConfig>(), Ok(OpponentConfig::human()));
        assert_eq!(
            "Hard".parse::<OpponentConfig>(),
            Ok(OpponentConfig::computer(Difficulty::Hard))
        );
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty("expert".to_string()))
        );
        assert_eq!(OpponentConfig::computer(Difficulty::Medium).to_string(), "medium");
    }
}
