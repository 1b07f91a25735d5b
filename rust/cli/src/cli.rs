//! Command-line argument definitions for the `oxo` binary.

use clap::{Parser, Subcommand};

use crate::StrategyArg;

#[derive(Debug, Parser)]
#[command(
    name = "oxo",
    version,
    about = "Tic-tac-toe against a computer opponent"
)]
pub struct OxoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play interactively against the computer
    Play {
        /// Decision strategy for the computer player
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
        /// Number of games in the session (default from config, usually 1)
        #[arg(long)]
        games: Option<u32>,
        /// Seed for the computer's random tie-breaking
        #[arg(long)]
        seed: Option<u64>,
        /// Thinking pause before the computer's move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Append finished games to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Pit two strategies against each other and print a summary
    Eval {
        /// Strategy for side A
        #[arg(long = "policy-a", value_enum)]
        policy_a: StrategyArg,
        /// Strategy for side B
        #[arg(long = "policy-b", value_enum)]
        policy_b: StrategyArg,
        /// Number of games to play (sides alternate who opens)
        #[arg(long)]
        games: Option<u32>,
        /// Seed for reproducible match series
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
