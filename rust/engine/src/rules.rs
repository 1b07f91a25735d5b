use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};

/// A winning line as an ordered triple of `(row, col)` coordinates.
pub type Line = [(usize, usize); 3];

/// The 8 winning patterns, in evaluation order: 3 rows, 3 columns, then the
/// two diagonals. [`evaluate`] reports the first matching pattern, so this
/// order is part of the contract.
pub const WIN_LINES: [Line; 8] = [
    // rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Classification of a board position.
///
/// A verdict is always derived from a board by [`evaluate`]; it is never
/// stored or mutated, so re-evaluating an unchanged board yields the same
/// result.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// The game continues; at least one empty cell and no completed line.
    InProgress,
    /// `winner` holds all three cells of `line`.
    Win { winner: Player, line: Line },
    /// All nine cells are filled and no line is complete.
    Draw,
}

impl Verdict {
    /// Returns `true` for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }

    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Win { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

/// Classifies a board as won, drawn, or still in progress.
///
/// Each pattern in [`WIN_LINES`] is tested in order; the first one whose
/// three cells hold the same mark decides the verdict. A board holding
/// several completed lines is unreachable in legal play (the game stops at
/// the first win) but is still classified deterministically rather than
/// rejected. With no completed line, a full board is a [`Verdict::Draw`] and
/// anything else is [`Verdict::InProgress`].
///
/// # Examples
///
/// ```
/// use oxo_engine::board::{Board, Move, Player};
/// use oxo_engine::rules::{evaluate, Verdict};
///
/// assert_eq!(evaluate(&Board::new()), Verdict::InProgress);
///
/// let board = Board::new()
///     .apply(Move::new(0, 0), Player::X).unwrap()
///     .apply(Move::new(0, 1), Player::X).unwrap()
///     .apply(Move::new(0, 2), Player::X).unwrap();
/// assert_eq!(evaluate(&board).winner(), Some(Player::X));
/// ```
pub fn evaluate(board: &Board) -> Verdict {
    for line in WIN_LINES {
        let [(r0, c0), (r1, c1), (r2, c2)] = line;
        let cells = board.cells();
        if let Some(mark) = cells[r0][c0] {
            if cells[r1][c1] == Some(mark) && cells[r2][c2] == Some(mark) {
                return Verdict::Win { winner: mark, line };
            }
        }
    }
    if board.is_full() {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}
