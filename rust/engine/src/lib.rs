//! # oxo-engine: Tic-Tac-Toe Game Engine Core
//!
//! Board representation, rules classification, and game-state transitions
//! for a 3x3 tic-tac-toe game. The engine is pure and synchronous: every
//! operation is a deterministic function of its inputs, boards have value
//! semantics, and verdicts are derived on demand rather than stored.
//!
//! ## Core Modules
//!
//! - [`board`] - Board, cell, player, and move types plus move enumeration
//! - [`rules`] - Win/draw classification against the 8 fixed winning lines
//! - [`game`] - Immutable per-step game state with turn alternation
//! - [`logger`] - Game record serialization to JSONL session logs
//! - [`errors`] - Error types for contract violations
//!
//! ## Quick Start
//!
//! ```rust
//! use oxo_engine::board::{Move, Player};
//! use oxo_engine::game::GameState;
//! use oxo_engine::rules::Verdict;
//!
//! let mut state = GameState::new(Player::X);
//! for mv in [Move::new(0, 0), Move::new(1, 1), Move::new(0, 1),
//!            Move::new(2, 2), Move::new(0, 2)] {
//!     state = state.play(mv).unwrap();
//! }
//!
//! // X completed the top row
//! assert_eq!(state.verdict().winner(), Some(Player::X));
//! assert!(matches!(state.verdict(), Verdict::Win { .. }));
//! ```
//!
//! ## Contract Violations Are Errors, Not Panics
//!
//! Out-of-range coordinates, occupied cells, and moves after the game has
//! ended all come back as [`errors::GameError`] values so a host can treat
//! them as silent no-ops:
//!
//! ```rust
//! use oxo_engine::board::{Board, Move, Player};
//! use oxo_engine::errors::GameError;
//!
//! let board = Board::new().apply(Move::new(0, 0), Player::X).unwrap();
//! let result = board.apply(Move::new(0, 0), Player::O);
//! assert_eq!(result, Err(GameError::IllegalMove { row: 0, col: 0 }));
//! ```

pub mod board;
pub mod errors;
pub mod game;
pub mod logger;
pub mod rules;
