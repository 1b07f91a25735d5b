//! # oxo-ai: Computer Opponent for Tic-Tac-Toe
//!
//! Move selection policies for the computer player. Two interchangeable
//! strategies are provided behind a common trait:
//!
//! - [`heuristic`] - Fast priority-rule selection (win, block, center,
//!   corner, anything). Not guaranteed to avoid losses; this is the simple
//!   mode by design.
//! - [`minimax`] - Exhaustive full-depth game-tree search. Never loses when
//!   a non-losing move exists and converts opponent mistakes into the
//!   fastest available win.
//!
//! Both policies take the computer's mark explicitly, so either X or O can
//! be the computer. Random tie-breaking (corner and fallback picks) is
//! driven by a seedable ChaCha20 RNG so sessions are reproducible.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxo_ai::{create_policy_seeded, Strategy};
//! use oxo_engine::board::{Board, Player};
//!
//! let mut policy = create_policy_seeded(Strategy::Exhaustive, 42);
//!
//! let board = Board::new();
//! let mv = policy.choose_move(&board, Player::O).unwrap();
//! assert!(board.is_empty(mv.row, mv.col).unwrap());
//! ```

use oxo_engine::board::{Board, Move, Player};
use oxo_engine::errors::GameError;

pub mod heuristic;
pub mod minimax;

/// Trait defining the interface for computer move selection.
///
/// Implementors receive the current board and the mark they are playing and
/// must return a legal move whenever at least one empty cell exists. Callers
/// own the precondition that the board is not full; a full board is reported
/// as [`GameError::NoLegalMoves`] rather than a panic.
///
/// # Example Implementation
///
/// ```rust
/// use oxo_ai::MovePolicy;
/// use oxo_engine::board::{Board, Move, Player};
/// use oxo_engine::errors::GameError;
///
/// struct FirstFree;
///
/// impl MovePolicy for FirstFree {
///     fn choose_move(&mut self, board: &Board, _player: Player) -> Result<Move, GameError> {
///         board
///             .available_moves()
///             .first()
///             .copied()
///             .ok_or(GameError::NoLegalMoves)
///     }
///
///     fn name(&self) -> &str {
///         "FirstFree"
///     }
/// }
/// ```
pub trait MovePolicy {
    /// Selects a move for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMoves`] if the board has no empty cell.
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<Move, GameError>;

    /// Returns the name/identifier of this policy.
    fn name(&self) -> &str;
}

/// Selectable decision strategies for the computer player.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Priority-rule heuristic; fast, not loss-proof
    Heuristic,
    /// Full minimax search; game-theoretically optimal
    Exhaustive,
}

impl Strategy {
    /// Parses a strategy from its configuration name.
    pub fn from_name(name: &str) -> Option<Strategy> {
        match name.to_ascii_lowercase().as_str() {
            "heuristic" => Some(Strategy::Heuristic),
            "exhaustive" => Some(Strategy::Exhaustive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Heuristic => "heuristic",
            Strategy::Exhaustive => "exhaustive",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Factory function to create a policy with an OS-random tie-break seed.
///
/// # Example
///
/// ```rust
/// use oxo_ai::{create_policy, Strategy};
///
/// let policy = create_policy(Strategy::Heuristic);
/// assert_eq!(policy.name(), "heuristic");
/// ```
pub fn create_policy(strategy: Strategy) -> Box<dyn MovePolicy> {
    create_policy_seeded(strategy, rand::random())
}

/// Factory function to create a policy with a fixed tie-break seed, for
/// reproducible sessions and tests.
pub fn create_policy_seeded(strategy: Strategy, seed: u64) -> Box<dyn MovePolicy> {
    match strategy {
        Strategy::Heuristic => Box::new(heuristic::HeuristicPolicy::with_seed(seed)),
        Strategy::Exhaustive => Box::new(minimax::MinimaxPolicy::with_seed(seed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names_round_trip() {
        for strategy in [Strategy::Heuristic, Strategy::Exhaustive] {
            assert_eq!(Strategy::from_name(strategy.as_str()), Some(strategy));
        }
        assert_eq!(Strategy::from_name("EXHAUSTIVE"), Some(Strategy::Exhaustive));
        assert_eq!(Strategy::from_name("alphabeta"), None);
    }

    #[test]
    fn factory_reports_policy_names() {
        assert_eq!(create_policy(Strategy::Heuristic).name(), "heuristic");
        assert_eq!(create_policy(Strategy::Exhaustive).name(), "exhaustive");
    }

    #[test]
    fn policies_only_propose_empty_cells() {
        use oxo_engine::board::{Board, Move, Player};

        let board = Board::new()
            .apply(Move::new(1, 1), Player::X)
            .unwrap()
            .apply(Move::new(0, 0), Player::O)
            .unwrap();
        for strategy in [Strategy::Heuristic, Strategy::Exhaustive] {
            let mut policy = create_policy_seeded(strategy, 7);
            let mv = policy.choose_move(&board, Player::O).unwrap();
            assert!(board.is_empty(mv.row, mv.col).unwrap());
        }
    }

    #[test]
    fn full_board_is_a_caller_error() {
        use oxo_engine::board::{Board, Move, Player};
        use oxo_engine::errors::GameError;

        // X O X / X O O / O X X
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
        ];
        let mut board = Board::new();
        for (i, mark) in marks.iter().enumerate() {
            board = board.apply(Move::new(i / 3, i % 3), *mark).unwrap();
        }
        for strategy in [Strategy::Heuristic, Strategy::Exhaustive] {
            let mut policy = create_policy_seeded(strategy, 7);
            assert_eq!(
                policy.choose_move(&board, Player::O),
                Err(GameError::NoLegalMoves)
            );
        }
    }
}
