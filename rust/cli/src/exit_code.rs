//! Process exit codes, kept in one place so `run` and the tests agree.

/// Clean exit, including `--help`/`--version` and a user quit.
pub const SUCCESS: i32 = 0;

/// Argument errors and command failures.
pub const ERROR: i32 = 2;
