//! Exhaustive minimax move selection.
//!
//! Depth-first search over the complete remaining game tree. The tree is
//! bounded at 9 plies, so a full search always terminates quickly and no
//! pruning or depth cutoff is needed. Terminal positions score `10 - depth`
//! for a computer win, `depth - 10` for an opponent win, and `0` for a draw;
//! folding the depth into the score makes the policy chase the fastest win
//! and drag out unavoidable losses.
//!
//! Ties keep the first move in row-major scan order (strict comparisons), so
//! play is deterministic. The RNG only backs the defensive fallback when no
//! candidate beats the sentinel, which cannot happen on a board with a legal
//! move.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use oxo_engine::board::{Board, Move, Player};
use oxo_engine::errors::GameError;
use oxo_engine::rules::{evaluate, Verdict};

use crate::MovePolicy;

/// Scores a terminal board from `me`'s point of view, or `None` if the game
/// continues.
fn terminal_score(board: &Board, me: Player, depth: i32) -> Option<i32> {
    match evaluate(board) {
        Verdict::Win { winner, .. } => {
            if winner == me {
                Some(10 - depth)
            } else {
                Some(depth - 10)
            }
        }
        Verdict::Draw => Some(0),
        Verdict::InProgress => None,
    }
}

/// Recursive value computation. The maximizing layer plays `me`, the
/// minimizing layer plays the opponent; only [`MinimaxPolicy::choose_move`]
/// selects an actual move. Every branch explores its own board copy.
fn search(board: &Board, me: Player, depth: i32, maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(board, me, depth) {
        return score;
    }

    let mover = if maximizing { me } else { me.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in board.available_moves() {
        // available_moves only yields empty in-range cells, so apply cannot fail
        if let Ok(next) = board.apply(mv, mover) {
            let score = search(&next, me, depth + 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
    }
    best
}

/// Full-depth search policy. Never loses when a non-losing move exists.
#[derive(Debug, Clone)]
pub struct MinimaxPolicy {
    rng: ChaCha20Rng,
}

impl MinimaxPolicy {
    /// Creates a policy with an OS-random seed for the defensive fallback.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for MinimaxPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for MinimaxPolicy {
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<Move, GameError> {
        let available = board.available_moves();
        if available.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        let mut best_score = i32::MIN;
        let mut best_move = None;
        for &mv in &available {
            if let Ok(next) = board.apply(mv, player) {
                let score = search(&next, player, 1, false);
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
            }
        }

        // Unreachable with at least one legal move, but fall back to a
        // random legal move rather than erroring out.
        match best_move {
            Some(mv) => Ok(mv),
            None => available
                .choose(&mut self.rng)
                .copied()
                .ok_or(GameError::NoLegalMoves),
        }
    }

    fn name(&self) -> &str {
        "exhaustive"
    }
}
