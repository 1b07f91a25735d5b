//! Input parsing and validation for interactive commands.
//!
//! This module parses the user's cell selection during interactive play.
//! Two input forms are accepted:
//!
//! - A single digit `1`-`9`, laid out like a phone keypad / numpad with `7 8 9`
//!   across the top row and `1 2 3` across the bottom
//! - An explicit `ROW COL` pair with 0-based indices, e.g. `0 2` for the
//!   top-right cell
//!
//! Plus the session commands `q`/`quit` (leave the program) and `n`/`new`
//! (abandon the current game and start a fresh one).

use oxo_engine::board::Move;

/// Result type for parsing user input during interactive gameplay.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Valid cell selection parsed from input
    Move(Move),
    /// User entered quit command (q or quit)
    Quit,
    /// User asked to abandon the current game and start over (n or new)
    NewGame,
    /// Invalid input with error message
    Invalid(String),
}

/// Maps a keypad digit to its board cell. Key 7 is the top-left cell and
/// key 3 is the bottom-right, matching a numpad.
fn keypad_cell(key: u32) -> Option<Move> {
    if !(1..=9).contains(&key) {
        return None;
    }
    let row = 2 - ((key as usize - 1) / 3);
    let col = (key as usize - 1) % 3;
    Some(Move::new(row, col))
}

/// Parse user input into a cell selection or a session command.
///
/// # Example
///
/// ```rust
/// # use oxo_cli::validation::{parse_move_input, ParseResult};
/// use oxo_engine::board::Move;
///
/// // keypad digit: 7 is the top-left cell
/// assert_eq!(parse_move_input("7"), ParseResult::Move(Move::new(0, 0)));
///
/// // explicit row/col pair
/// assert_eq!(parse_move_input("2 1"), ParseResult::Move(Move::new(2, 1)));
///
/// assert_eq!(parse_move_input("q"), ParseResult::Quit);
///
/// match parse_move_input("banana") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_move_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts.len() == 1 {
        match parts[0] {
            "q" | "quit" => return ParseResult::Quit,
            "n" | "new" => return ParseResult::NewGame,
            token => {
                return match token.parse::<u32>() {
                    Ok(key) => match keypad_cell(key) {
                        Some(mv) => ParseResult::Move(mv),
                        None => ParseResult::Invalid(format!(
                            "Cell number must be 1-9, got {}",
                            key
                        )),
                    },
                    Err(_) => ParseResult::Invalid(format!(
                        "Unrecognized input '{}' (expected 1-9, ROW COL, n, or q)",
                        token
                    )),
                };
            }
        }
    }

    if parts.len() == 2 {
        let row = parts[0].parse::<usize>();
        let col = parts[1].parse::<usize>();
        return match (row, col) {
            (Ok(row), Ok(col)) if row <= 2 && col <= 2 => {
                ParseResult::Move(Move::new(row, col))
            }
            (Ok(_), Ok(_)) => {
                ParseResult::Invalid("Row and column must each be 0-2".to_string())
            }
            _ => ParseResult::Invalid("Expected two numbers, e.g. '1 2'".to_string()),
        };
    }

    ParseResult::Invalid("Expected a single cell number or ROW COL".to_string())
}
