//! Command implementations for the py-typed-marker CLI

pub mod completions;
pub mod mark;

use crate::cli::Cli;
use crate::error::Result;

/// Dispatch parsed arguments to the matching command
pub fn run(cli: Cli) -> Result<()> {
    match cli.completions {
        Some(shell) => completions::run(shell),
        None => mark::run(&cli),
    }
}
