//! Input utilities for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// This function is used for interactive commands that need user input.
/// It trims whitespace from the input and returns `None` on EOF or read errors.
///
/// # Arguments
///
/// * `stdin` - Buffered reader to read from (typically stdin)
///
/// # Returns
///
/// * `Some(String)` - Trimmed input line (may be empty after trimming)
/// * `None` - EOF or read error occurred
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use oxo_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_trims_whitespace() {
        let mut input = Cursor::new(b"  5  \n");
        assert_eq!(read_stdin_line(&mut input), Some("5".to_string()));
    }

    #[test]
    fn test_read_stdin_line_eof_returns_none() {
        let mut input = Cursor::new(b"");
        assert_eq!(read_stdin_line(&mut input), None);
    }

    #[test]
    fn test_read_stdin_line_reads_one_line_at_a_time() {
        let mut input = Cursor::new(b"1 2\nq\n");
        assert_eq!(read_stdin_line(&mut input), Some("1 2".to_string()));
        assert_eq!(read_stdin_line(&mut input), Some("q".to_string()));
        assert_eq!(read_stdin_line(&mut input), None);
    }
}
