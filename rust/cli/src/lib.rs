//! # oxo_cli: Terminal Front End for Tic-Tac-Toe
//!
//! Command-line host around [`oxo_engine`] and [`oxo_ai`]. Provides:
//!
//! - `play` - Interactive games against the computer, with keypad input,
//!   an optional JSONL session log, and a configurable thinking pause
//! - `eval` - Strategy-vs-strategy series with a win/draw summary
//! - `cfg`  - Show the resolved configuration and where each value came from
//!
//! The library exposes [`run`] so the binary stays a thin shim and tests can
//! drive the whole CLI with injected streams.

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

pub use error::CliError;

use cli::{Commands, OxoCli};
use oxo_ai::Strategy;

/// Known subcommands, listed when argument parsing fails.
const COMMANDS: &[&str] = &["play", "eval", "cfg"];

/// Strategy selector as it appears on the command line.
///
/// Mirrors [`oxo_ai::Strategy`]; kept separate so the AI crate does not
/// depend on clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Priority rules: win, block, center, corner, anything
    Heuristic,
    /// Full game-tree search; never loses
    Exhaustive,
}

impl StrategyArg {
    pub fn to_strategy(self) -> Strategy {
        match self {
            StrategyArg::Heuristic => Strategy::Heuristic,
            StrategyArg::Exhaustive => Strategy::Exhaustive,
        }
    }
}

/// Parses arguments and dispatches to the matching command handler.
///
/// Returns the process exit code instead of exiting, so tests can call it
/// directly with captured streams.
///
/// # Arguments
///
/// * `args` - Command-line arguments, including the program name
/// * `out` - Output stream (typically stdout)
/// * `err` - Error stream (typically stderr)
///
/// # Returns
///
/// * `0` on success (including `--help`/`--version`)
/// * `2` on argument errors or command failures
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let parsed = match OxoCli::try_parse_from(args) {
        Ok(parsed) => parsed,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    let _ = writeln!(err, "Commands: {}", COMMANDS.join(", "));
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match parsed.cmd {
        Commands::Play {
            strategy,
            games,
            seed,
            delay_ms,
            log,
        } => {
            let mut stdin = std::io::stdin().lock();
            commands::handle_play_command(
                strategy, games, seed, delay_ms, log, out, err, &mut stdin,
            )
        }
        Commands::Eval {
            policy_a,
            policy_b,
            games,
            seed,
        } => commands::handle_eval_command(policy_a, policy_b, games, seed, out, err),
        Commands::Cfg => commands::handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_cli(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_help_exits_zero_on_stdout() {
        let (code, out, _err) = run_cli(&["oxo", "--help"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("play"));
        assert!(out.contains("eval"));
        assert!(out.contains("cfg"));
    }

    #[test]
    fn test_unknown_command_lists_known_ones() {
        let (code, _out, err) = run_cli(&["oxo", "solve"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(err.contains("Commands: play, eval, cfg"));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        let (code, _out, err) = run_cli(&["oxo"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(!err.is_empty());
    }

    #[test]
    fn test_eval_runs_end_to_end() {
        let (code, out, _err) = run_cli(&[
            "oxo",
            "eval",
            "--policy-a",
            "exhaustive",
            "--policy-b",
            "exhaustive",
            "--games",
            "2",
            "--seed",
            "1",
        ]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("draws: 2"));
    }

    #[test]
    fn test_bad_strategy_value_is_rejected_by_clap() {
        let (code, _out, err) = run_cli(&["oxo", "eval", "--policy-a", "montecarlo"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(err.contains("montecarlo"));
    }

    #[test]
    fn test_strategy_arg_maps_to_ai_strategy() {
        assert_eq!(StrategyArg::Heuristic.to_strategy(), Strategy::Heuristic);
        assert_eq!(StrategyArg::Exhaustive.to_strategy(), Strategy::Exhaustive);
    }
}
