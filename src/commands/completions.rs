//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::Cli;
use crate::error::Result;

/// Generate shell completions
pub fn run<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "stache", out);
    Ok(())
}
