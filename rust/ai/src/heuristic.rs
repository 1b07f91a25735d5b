//! Priority-rule move selection.
//!
//! Applies a fixed rule ladder and plays the first rule that fires:
//!
//! 1. Win now - a placement that immediately completes the computer's line
//! 2. Block - a placement the opponent could use to win on their next turn
//! 3. Center - `(1, 1)` if empty
//! 4. Corner - uniformly random among the empty corners
//! 5. Anything - uniformly random among all remaining empty cells
//!
//! Rules 1 and 2 break ties by taking the first hit in row-major scan order.
//! The ladder is a deliberate trade of move quality for simplicity: unlike
//! the exhaustive search it can be out-maneuvered (a double threat beats
//! it), which makes it the easy mode.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use oxo_engine::board::{Board, Move, Player};
use oxo_engine::errors::GameError;
use oxo_engine::rules::evaluate;

use crate::MovePolicy;

const CENTER: Move = Move { row: 1, col: 1 };
const CORNERS: [Move; 4] = [
    Move { row: 0, col: 0 },
    Move { row: 0, col: 2 },
    Move { row: 2, col: 0 },
    Move { row: 2, col: 2 },
];

/// Finds the first available move that gives `player` an immediate win,
/// scanning in row-major order. Each candidate is tried on a private copy of
/// the board, so the live position is never touched.
pub fn find_winning_move(board: &Board, player: Player) -> Option<Move> {
    board.available_moves().into_iter().find(|&mv| {
        board
            .apply(mv, player)
            .map(|next| evaluate(&next).winner() == Some(player))
            .unwrap_or(false)
    })
}

/// Priority-rule policy with a seedable RNG for the random tie-breaks.
#[derive(Debug, Clone)]
pub struct HeuristicPolicy {
    rng: ChaCha20Rng,
}

impl HeuristicPolicy {
    /// Creates a policy with an OS-random seed.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Creates a policy whose corner/fallback picks are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<Move, GameError> {
        let available = board.available_moves();
        if available.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        if let Some(mv) = find_winning_move(board, player) {
            return Ok(mv);
        }

        if let Some(mv) = find_winning_move(board, player.opponent()) {
            return Ok(mv);
        }

        if board.is_empty(CENTER.row, CENTER.col)? {
            return Ok(CENTER);
        }

        let open_corners: Vec<Move> = CORNERS
            .iter()
            .copied()
            .filter(|mv| board.is_empty(mv.row, mv.col).unwrap_or(false))
            .collect();
        if let Some(&mv) = open_corners.choose(&mut self.rng) {
            return Ok(mv);
        }

        available
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
