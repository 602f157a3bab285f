//! Line-oriented text console for playing from a terminal.
//!
//! One command per line; blank lines and `#` comments are skipped. Every
//! command gets a reply starting with `=` on success or `?` on failure,
//! followed by an empty line.
//!
//! ## Commands
//!
//! - `new <human|easy|medium|hard>` - Start a new match against that opponent
//! - `move <row> <col>` - Play at a cell (rows 0-4, columns 0-5)
//! - `board` - Show the board
//! - `score` - Show the match score
//! - `reset` - Start the next round of the current match
//! - `newmatch` - Zero the score and play again with the same opponent
//! - `help` - List all commands
//! - `quit` - Exit
//!
//! In computer mode the opponent answers each human move, after a short pause.
//! A finished round is followed by the next one unless the match is over.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::constants::{OPPONENT_DELAY_MS, ROUND_RESET_DELAY_MS};
use crate::game::{Game, GameEvent, RoundEnd};
use crate::opponent::OpponentConfig;
use crate::turn::RoundStatus;

/// The list of known console commands.
const KNOWN_COMMANDS: &[&str] = &[
    "board", "help", "move", "new", "newmatch", "quit", "reset", "score",
];

pub struct ConsoleEngine {
    game: Game,
    opponent_delay: Duration,
    round_delay: Duration,
}

impl Default for ConsoleEngine {
    fn default() -> Self {
        Self::new(Game::new())
    }
}

impl ConsoleEngine {
    /// Console with the default pauses.
    pub fn new(game: Game) -> Self {
        Self::with_delays(
            game,
            Duration::from_millis(OPPONENT_DELAY_MS),
            Duration::from_millis(ROUND_RESET_DELAY_MS),
        )
    }

    pub fn with_delays(game: Game, opponent_delay: Duration, round_delay: Duration) -> Self {
        Self {
            game,
            opponent_delay,
            round_delay,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            writeln!(output, "{prefix} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "console command");
        match command {
            "help" => (true, KNOWN_COMMANDS.join("\n")),

            "quit" => (true, String::new()),

            "board" => (true, self.game.board().to_string().trim_end().to_string()),

            "score" => (true, score_line(&self.game)),

            "new" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let config = match args[0].parse::<OpponentConfig>() {
                    Ok(c) => c,
                    Err(e) => return (false, e.to_string()),
                };
                self.game.start_match(config);
                (true, format!("new match against {config}\n{}", self.status_line()))
            }

            "move" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let (row, col) = match (args[0].parse::<usize>(), args[1].parse::<usize>()) {
                    (Ok(r), Ok(c)) => (r, c),
                    _ => return (false, "invalid coordinate".to_string()),
                };
                match self.game.player_move_at(row, col) {
                    Ok(events) => {
                        let mut lines = describe(&events);
                        self.follow_up(&mut lines);
                        (true, lines.join("\n"))
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "reset" => match self.game.reset_round() {
                Ok(_) => (true, self.status_line()),
                Err(e) => (false, e.to_string()),
            },

            "newmatch" => {
                self.game.reset_match();
                (true, format!("{}\n{}", score_line(&self.game), self.status_line()))
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// After a human move: let the computer answer, then roll over finished rounds.
    fn follow_up(&mut self, lines: &mut Vec<String>) {
        if self.game.is_computer_turn() {
            thread::sleep(self.opponent_delay);
            match self.game.request_opponent_move() {
                Ok(events) => lines.extend(describe(&events)),
                Err(e) => lines.push(e.to_string()),
            }
        }

        if self.game.round_state().status.is_terminal() && !self.game.is_match_over() {
            thread::sleep(self.round_delay);
            if self.game.reset_round().is_ok() {
                lines.push("next round".to_string());
            }
        }
        if !self.game.is_match_over() {
            lines.push(self.status_line());
        }
    }

    fn status_line(&self) -> String {
        let state = self.game.round_state();
        match state.status {
            RoundStatus::InProgress => format!("{}'s turn", state.active),
            RoundStatus::Won(p) => format!("{p} wins!"),
            RoundStatus::Drawn => "It's a draw!".to_string(),
        }
    }
}

fn score_line(game: &Game) -> String {
    let s = game.score();
    format!("Score: X - {}, O - {}", s.x, s.o)
}

/// Render events as console lines.
fn describe(events: &[GameEvent]) -> Vec<String> {
    let mut lines = Vec::new();
    for event in events {
        match event {
            GameEvent::BoardChanged(board) => lines.push(board.to_string().trim_end().to_string()),
            GameEvent::RoundEnded {
                reason: RoundEnd::Win,
                winner: Some(p),
            } => lines.push(format!("{p} wins!")),
            GameEvent::RoundEnded { .. } => lines.push("It's a draw!".to_string()),
            GameEvent::ScoreChanged(s) => lines.push(format!("Score: X - {}, O - {}", s.x, s.o)),
            GameEvent::MatchEnded(p) => {
                lines.push(format!("{p} wins the match! Type newmatch to play again."))
            }
        }
    }
    lines
}
