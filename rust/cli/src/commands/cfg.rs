//! # Cfg Command
//!
//! Prints the resolved configuration and the provenance of each value
//! (default, config file, or environment variable), so a surprising setting
//! can be traced to where it was set.

use std::io::Write;

use crate::config::{self, ValueSource};
use crate::error::CliError;

fn source_label(source: ValueSource) -> &'static str {
    match source {
        ValueSource::Default => "default",
        ValueSource::File => "file",
        ValueSource::Env => "env",
    }
}

/// Handle the cfg command: show the effective configuration.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(resolved) => resolved,
        Err(e) => {
            writeln!(err, "Error: {}", e)?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    let cfg = &resolved.config;
    let sources = &resolved.sources;

    writeln!(
        out,
        "strategy = {} ({})",
        cfg.strategy,
        source_label(sources.strategy)
    )?;
    writeln!(
        out,
        "delay_ms = {} ({})",
        cfg.delay_ms,
        source_label(sources.delay_ms)
    )?;
    writeln!(
        out,
        "games    = {} ({})",
        cfg.games,
        source_label(sources.games)
    )?;
    match cfg.seed {
        Some(seed) => writeln!(out, "seed     = {} ({})", seed, source_label(sources.seed))?,
        None => writeln!(out, "seed     = unset ({})", source_label(sources.seed))?,
    }
    Ok(())
}
