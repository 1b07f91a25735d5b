//! Board, move, and verdict formatters for terminal display.
//!
//! Pure functions turning engine values into strings for the interactive
//! commands. Empty cells render as their keypad digit so the player can see
//! which key selects which cell; winning cells are bracketed when a
//! completed line is highlighted.
//!
//! ## Example
//!
//! ```rust
//! use oxo_engine::board::{Board, Move, Player};
//! use oxo_cli::formatters::format_board;
//!
//! let board = Board::new().apply(Move::new(1, 1), Player::X).unwrap();
//! let rendered = format_board(&board);
//! assert!(rendered.contains(" X "));
//! assert!(rendered.contains(" 7 ")); // top-left is still selectable with key 7
//! ```

use oxo_engine::board::{Board, Move, Player, BOARD_SIZE};
use oxo_engine::rules::{Line, Verdict};

/// Keypad digit that selects the cell at `(row, col)`. Inverse of the
/// mapping in [`crate::validation`].
fn keypad_digit(row: usize, col: usize) -> char {
    let key = (2 - row) * 3 + col + 1;
    char::from_digit(key as u32, 10).unwrap_or('?')
}

fn cell_token(board: &Board, row: usize, col: usize, line: Option<&Line>) -> String {
    let mark = board
        .get(row, col)
        .ok()
        .flatten()
        .map(|p| p.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| keypad_digit(row, col).to_string());
    let highlighted = line.is_some_and(|l| l.contains(&(row, col)));
    if highlighted {
        format!("[{}]", mark)
    } else {
        format!(" {} ", mark)
    }
}

/// Render a board as a 3-line grid with `|`/`-` separators.
pub fn format_board(board: &Board) -> String {
    format_board_with_line(board, None)
}

/// Render a board, bracketing the cells of `line` when one is given.
/// Used to highlight the winning line on a finished game.
pub fn format_board_with_line(board: &Board, line: Option<&Line>) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        for col in 0..BOARD_SIZE {
            if col > 0 {
                out.push('|');
            }
            out.push_str(&cell_token(board, row, col, line));
        }
        out.push('\n');
    }
    out
}

/// Format a move as its coordinate pair, e.g. `(0, 2)`.
pub fn format_move(mv: &Move) -> String {
    format!("({}, {})", mv.row, mv.col)
}

/// Format a verdict as a short neutral summary ("X wins", "draw", ...).
/// Player-facing phrasing ("You win!") is up to the command.
pub fn format_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::InProgress => "in progress".to_string(),
        Verdict::Win { winner, .. } => format!("{} wins", winner),
        Verdict::Draw => "draw".to_string(),
    }
}
