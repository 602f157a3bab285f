//! Cumulative match score.

use crate::board::Player;
use crate::constants::MATCH_THRESHOLD;

/// Round wins per player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub x: u32,
    pub o: u32,
}

impl Score {
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

/// Tracks round wins across a match. Draws never score.
#[derive(Clone, Debug)]
pub struct MatchScorer {
    score: Score,
    threshold: u32,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer {
    pub fn new() -> Self {
        Self::with_threshold(MATCH_THRESHOLD)
    }

    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            score: Score::default(),
            threshold,
        }
    }

    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.score.x += 1,
            Player::O => self.score.o += 1,
        }
    }

    pub fn current_score(&self) -> Score {
        self.score
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn is_match_over(&self) -> bool {
        self.leader().is_some()
    }

    /// The player who reached the threshold, if either has.
    pub fn leader(&self) -> Option<Player> {
        if self.score.x >= self.threshold {
            Some(Player::X)
        } else if self.score.o >= self.threshold {
            Some(Player::O)
        } else {
            None
        }
    }

    pub fn reset_match(&mut self) {
        self.score = Score::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let mut scorer = MatchScorer::new();
        scorer.record_win(Player::X);
        scorer.record_win(Player::O);
        scorer.record_win(Player::X);
        assert_eq!(scorer.current_score(), Score { x: 2, o: 1 });
        assert_eq!(scorer.current_score().of(Player::O), 1);
        assert!(!scorer.is_match_over());

        scorer.reset_match();
        assert_eq!(scorer.current_score(), Score::default());
    }

    #[test]
    fn test_match_over_at_threshold() {
        let mut scorer = MatchScorer::new();
        for _ in 0..4 {
            scorer.record_win(Player::O);
        }
        assert!(!scorer.is_match_over());
        scorer.record_win(Player::O);
        assert!(scorer.is_match_over());
        assert_eq!(scorer.leader(), Some(Player::O));

        scorer.reset_match();
        assert!(!scorer.is_match_over());
        assert_eq!(scorer.leader(), None);
    }
}
