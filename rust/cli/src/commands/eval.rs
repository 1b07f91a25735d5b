//! # Eval Command
//!
//! Pits two decision strategies against each other without any human input
//! and prints a win/draw summary. Sides alternate who opens so that the
//! first-move advantage is split evenly across the series.

use std::io::Write;

use crate::error::CliError;
use crate::StrategyArg;
use oxo_ai::{create_policy_seeded, MovePolicy, Strategy};
use oxo_engine::board::Player;
use oxo_engine::game::GameState;
use oxo_engine::rules::Verdict;

/// Outcome counters for a strategy-vs-strategy series.
#[derive(Debug, Default, Clone, Copy)]
pub struct EvalStats {
    pub games: u32,
    pub a_wins: u32,
    pub b_wins: u32,
    pub draws: u32,
    pub total_moves: u64,
}

impl EvalStats {
    pub fn a_win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.a_wins as f64 / self.games as f64
    }

    pub fn b_win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.b_wins as f64 / self.games as f64
    }

    pub fn draw_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f64 / self.games as f64
    }
}

/// Handle the eval command: play a series between two strategies.
///
/// # Arguments
///
/// * `policy_a` - Strategy for side A
/// * `policy_b` - Strategy for side B
/// * `games` - Number of games in the series (default 10)
/// * `seed` - Base seed; each game derives its own so series are reproducible
/// * `out` - Output stream for the summary
/// * `err` - Error stream
///
/// # Returns
///
/// * `Ok(())` when the series completes
/// * `Err(CliError)` if games < 1 or the engine reports an error
pub fn handle_eval_command(
    policy_a: StrategyArg,
    policy_b: StrategyArg,
    games: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let games = games.unwrap_or(10);
    if games == 0 {
        let msg = "games must be >= 1";
        writeln!(err, "Error: {}", msg)?;
        return Err(CliError::InvalidInput(msg.to_string()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let a = policy_a.to_strategy();
    let b = policy_b.to_strategy();

    writeln!(
        out,
        "eval: {} vs {} games={} seed={}",
        a, b, games, seed
    )?;

    let stats = run_series(a, b, games, seed)?;

    writeln!(
        out,
        "{} (A): {} wins ({:.0}%)",
        a,
        stats.a_wins,
        stats.a_win_rate() * 100.0
    )?;
    writeln!(
        out,
        "{} (B): {} wins ({:.0}%)",
        b,
        stats.b_wins,
        stats.b_win_rate() * 100.0
    )?;
    writeln!(
        out,
        "draws: {} ({:.0}%)",
        stats.draws,
        stats.draw_rate() * 100.0
    )?;
    writeln!(
        out,
        "avg moves/game: {:.1}",
        stats.total_moves as f64 / stats.games as f64
    )?;
    Ok(())
}

/// Plays `games` games between the two strategies. Side A is X in
/// even-numbered games and O in odd-numbered ones; whoever holds X opens.
fn run_series(a: Strategy, b: Strategy, games: u32, seed: u64) -> Result<EvalStats, CliError> {
    let mut stats = EvalStats::default();
    for g in 0..games {
        let game_seed = seed.wrapping_add(g as u64);
        let mut policy_a = create_policy_seeded(a, game_seed);
        let mut policy_b = create_policy_seeded(b, game_seed ^ 0x9e37_79b9);
        let a_plays = if g % 2 == 0 { Player::X } else { Player::O };

        let mut state = GameState::new(Player::X);
        while state.is_active() {
            let mover = state.to_move();
            let mv = if mover == a_plays {
                policy_a.choose_move(state.board(), mover)?
            } else {
                policy_b.choose_move(state.board(), mover)?
            };
            state = state.play(mv)?;
            stats.total_moves += 1;
        }

        stats.games += 1;
        match state.verdict() {
            Verdict::Win { winner, .. } => {
                if winner == a_plays {
                    stats.a_wins += 1;
                } else {
                    stats.b_wins += 1;
                }
            }
            Verdict::Draw => stats.draws += 1,
            Verdict::InProgress => unreachable!("loop exits only on a terminal verdict"),
        }
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustive_mirror_match_is_all_draws() {
        let stats = run_series(Strategy::Exhaustive, Strategy::Exhaustive, 4, 1).expect("series");
        assert_eq!(stats.games, 4);
        assert_eq!(stats.draws, 4);
        assert_eq!(stats.a_wins, 0);
        assert_eq!(stats.b_wins, 0);
        // a drawn game always fills the board
        assert_eq!(stats.total_moves, 4 * 9);
    }

    #[test]
    fn test_heuristic_never_beats_exhaustive() {
        let stats = run_series(Strategy::Heuristic, Strategy::Exhaustive, 10, 99).expect("series");
        assert_eq!(stats.games, 10);
        assert_eq!(stats.a_wins, 0);
    }

    #[test]
    fn test_series_is_reproducible_for_a_fixed_seed() {
        let first = run_series(Strategy::Heuristic, Strategy::Heuristic, 6, 7).expect("series");
        let second = run_series(Strategy::Heuristic, Strategy::Heuristic, 6, 7).expect("series");
        assert_eq!(first.a_wins, second.a_wins);
        assert_eq!(first.b_wins, second.b_wins);
        assert_eq!(first.draws, second.draws);
        assert_eq!(first.total_moves, second.total_moves);
    }

    #[test]
    fn test_zero_games_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_eval_command(
            StrategyArg::Heuristic,
            StrategyArg::Exhaustive,
            Some(0),
            Some(1),
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_summary_reports_both_sides() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_eval_command(
            StrategyArg::Exhaustive,
            StrategyArg::Exhaustive,
            Some(2),
            Some(5),
            &mut out,
            &mut err,
        )
        .expect("eval");
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("eval: exhaustive vs exhaustive games=2 seed=5"));
        assert!(out.contains("draws: 2 (100%)"));
    }

    #[test]
    fn test_win_rates_on_empty_stats_are_zero() {
        let stats = EvalStats::default();
        assert_eq!(stats.a_win_rate(), 0.0);
        assert_eq!(stats.b_win_rate(), 0.0);
        assert_eq!(stats.draw_rate(), 0.0);
    }
}
