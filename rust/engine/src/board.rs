use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// Represents one of the two players.
/// X conventionally moves first and is the human in the CLI host, but all
/// engine and AI logic takes the acting mark explicitly and works for either
/// assignment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The X mark
    X,
    /// The O mark
    O,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proposed placement at `(row, col)`, each in `[0, 2]`.
/// A move is only legal if the target cell is empty at the time it is applied.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index (0 = top)
    pub row: usize,
    /// Column index (0 = left)
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 3x3 grid. Each cell holds `Some(player)` or `None` when empty.
///
/// Boards have value semantics: `apply` returns a new board and search code
/// explores hypothetical moves on copies, so the live game state is never
/// touched by a search branch.
///
/// # Examples
///
/// ```
/// use oxo_engine::board::{Board, Move, Player};
///
/// let board = Board::new();
/// assert_eq!(board.available_moves().len(), 9);
///
/// let board = board.apply(Move::new(1, 1), Player::X).unwrap();
/// assert_eq!(board.is_empty(1, 1), Ok(false));
/// assert_eq!(board.available_moves().len(), 8);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    fn check_coordinate(row: usize, col: usize) -> Result<(), GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            Err(GameError::InvalidCoordinate { row, col })
        } else {
            Ok(())
        }
    }

    /// Returns the mark at `(row, col)`, or `None` for an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCoordinate`] if either index is outside `[0, 2]`.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Player>, GameError> {
        Self::check_coordinate(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Returns `true` if the cell at `(row, col)` holds no mark.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCoordinate`] if either index is outside `[0, 2]`.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.get(row, col)?.is_none())
    }

    /// Returns every empty position in row-major order (row 0..2, col 0..2
    /// within each row). The scan order is fixed so first-match tie-breaking
    /// in the AI is reproducible.
    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col].is_none() {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Returns the number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count()
    }

    /// Returns `true` if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_some())
    }

    /// Returns a new board with `player`'s mark placed at `mv`. The receiver
    /// is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCoordinate`] if `mv` is outside the board,
    /// or [`GameError::IllegalMove`] if the target cell is occupied.
    pub fn apply(&self, mv: Move, player: Player) -> Result<Board, GameError> {
        Self::check_coordinate(mv.row, mv.col)?;
        if self.cells[mv.row][mv.col].is_some() {
            return Err(GameError::IllegalMove {
                row: mv.row,
                col: mv.col,
            });
        }
        let mut next = *self;
        next.cells[mv.row][mv.col] = Some(player);
        Ok(next)
    }

    /// Builds a board from a literal cell grid. Intended for tests and for
    /// hosts that reconstruct positions.
    pub fn from_cells(cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Raw access to the cell grid, row-major.
    pub fn cells(&self) -> &[[Option<Player>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}
