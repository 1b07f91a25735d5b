//! Command handler modules for the oxo CLI.
//!
//! Each subcommand is implemented in its own module file with a consistent
//! pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) and input
//!   streams (`&mut dyn BufRead`) passed as parameters so tests can script
//!   sessions
//! - Error propagation: All errors propagated via the `CliError` enum

mod cfg;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
