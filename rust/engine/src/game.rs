use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};
use crate::errors::GameError;
use crate::rules::{evaluate, Verdict};

/// One step of a game: the board plus whose turn it is.
///
/// States are immutable. [`GameState::play`] returns the successor state and
/// leaves the receiver untouched, so a host never shares mutable game state
/// with anything else and each step of the turn sequence can be inspected or
/// tested on its own. A reset is simply constructing a fresh state.
///
/// The verdict is always derived from the board via [`evaluate`], never
/// cached, so it cannot drift out of sync with the cells.
///
/// # Examples
///
/// ```
/// use oxo_engine::board::{Move, Player};
/// use oxo_engine::game::GameState;
///
/// let state = GameState::new(Player::X);
/// let state = state.play(Move::new(1, 1)).unwrap();
/// assert_eq!(state.to_move(), Player::O);
/// assert!(state.is_active());
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
}

impl GameState {
    /// Starts a new game on an empty board with `first` to move.
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is. Meaningless once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Classifies the current board.
    pub fn verdict(&self) -> Verdict {
        evaluate(&self.board)
    }

    /// Returns `true` while the game has not been won or drawn.
    pub fn is_active(&self) -> bool {
        !self.verdict().is_terminal()
    }

    /// Applies a move for the player to move and returns the successor state
    /// with the turn passed to the opponent.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game has already been won or drawn
    /// - [`GameError::InvalidCoordinate`] if `mv` is outside the board
    /// - [`GameError::IllegalMove`] if the target cell is occupied
    pub fn play(&self, mv: Move) -> Result<GameState, GameError> {
        if self.verdict().is_terminal() {
            return Err(GameError::GameOver);
        }
        let board = self.board.apply(mv, self.to_move)?;
        Ok(GameState {
            board,
            to_move: self.to_move.opponent(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_alternates_turns() {
        let s0 = GameState::new(Player::X);
        let s1 = s0.play(Move::new(0, 0)).unwrap();
        let s2 = s1.play(Move::new(1, 1)).unwrap();
        assert_eq!(s0.to_move(), Player::X);
        assert_eq!(s1.to_move(), Player::O);
        assert_eq!(s2.to_move(), Player::X);
        assert_eq!(s2.board().get(0, 0), Ok(Some(Player::X)));
        assert_eq!(s2.board().get(1, 1), Ok(Some(Player::O)));
    }

    #[test]
    fn play_does_not_mutate_the_previous_state() {
        let s0 = GameState::new(Player::X);
        let _ = s0.play(Move::new(2, 2)).unwrap();
        assert_eq!(s0, GameState::new(Player::X));
    }

    #[test]
    fn occupied_cell_is_rejected_without_state_change() {
        let state = GameState::new(Player::X).play(Move::new(0, 0)).unwrap();
        let result = state.play(Move::new(0, 0));
        assert_eq!(result, Err(GameError::IllegalMove { row: 0, col: 0 }));
        assert_eq!(state.board().filled(), 1);
    }

    #[test]
    fn finished_game_rejects_further_moves() {
        // X wins down the left column.
        let state = GameState::new(Player::X)
            .play(Move::new(0, 0))
            .unwrap()
            .play(Move::new(0, 1))
            .unwrap()
            .play(Move::new(1, 0))
            .unwrap()
            .play(Move::new(0, 2))
            .unwrap()
            .play(Move::new(2, 0))
            .unwrap();
        assert!(!state.is_active());
        assert_eq!(state.verdict().winner(), Some(Player::X));
        assert_eq!(state.play(Move::new(2, 2)), Err(GameError::GameOver));
    }

    #[test]
    fn reset_is_a_fresh_state() {
        let state = GameState::new(Player::X).play(Move::new(1, 1)).unwrap();
        let reset = GameState::new(Player::X);
        assert_ne!(state, reset);
        assert_eq!(reset.board().filled(), 0);
    }
}
