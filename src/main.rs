//! connect-five: five in a row on a 5x6 board.
//!
//! ## Usage
//!
//! - `connect-five` - Play a demo round, computer against computer
//! - `connect-five play` - Start the text console
//! - `connect-five demo` - Same as no subcommand

use std::io;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use connect_five::console::ConsoleEngine;
use connect_five::constants::{OPPONENT_DELAY_MS, ROUND_RESET_DELAY_MS};
use connect_five::game::{COMPUTER_PLAYER, Game};
use connect_five::opponent::{Difficulty, OpponentConfig, OpponentPolicy};
use connect_five::turn::{RoundStatus, TurnController};

/// connect-five: two-player five-in-a-row with a computer opponent
#[derive(Parser)]
#[command(name = "connect-five")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the computer opponent (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, one command per line
    Play {
        /// Opponent for the first match: human, easy, medium or hard
        #[arg(long, default_value = "human")]
        opponent: OpponentConfig,

        /// Pause before the computer moves, in milliseconds
        #[arg(long, default_value_t = OPPONENT_DELAY_MS)]
        opponent_delay_ms: u64,

        /// Pause before the next round starts, in milliseconds
        #[arg(long, default_value_t = ROUND_RESET_DELAY_MS)]
        round_delay_ms: u64,
    },
    /// Play one round of hard against medium and print it
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let policy = match cli.seed {
        Some(seed) => OpponentPolicy::with_seed(seed),
        None => OpponentPolicy::new(),
    };

    match cli.command {
        Some(Commands::Play {
            opponent,
            opponent_delay_ms,
            round_delay_ms,
        }) => {
            let mut game = Game::with_policy(policy);
            game.start_match(opponent);
            let mut engine = ConsoleEngine::with_delays(
                game,
                Duration::from_millis(opponent_delay_ms),
                Duration::from_millis(round_delay_ms),
            );
            engine.run(io::stdin().lock(), io::stdout())?;
        }
        Some(Commands::Demo) | None => run_demo(policy)?,
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_demo(mut policy: OpponentPolicy) -> anyhow::Result<()> {
    println!("connect-five: hard (O) against medium (X)\n");

    let mut turns = TurnController::new();
    while turns.status() == RoundStatus::InProgress {
        let player = turns.active_player();
        let difficulty = if player == COMPUTER_PLAYER {
            Difficulty::Hard
        } else {
            Difficulty::Medium
        };
        let mut scratch = *turns.board();
        let empty = scratch.empty_cells();
        let c = policy.choose_move(&mut scratch, &empty, player, difficulty)?;
        let outcome = turns.apply_move(c.row(), c.col())?;
        println!("{player} plays {}", outcome.coord);
    }

    println!("\n{}", turns.board());
    match turns.status() {
        RoundStatus::Won(p) => println!("{p} wins!"),
        RoundStatus::Drawn => println!("It's a draw!"),
        RoundStatus::InProgress => {}
    }
    Ok(())
}
