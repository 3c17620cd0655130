//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::Result;

/// Generate shell completions
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = <Cli as CommandFactory>::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout().lock());

    Ok(())
}
