//! completion command - Write a shell completion script to stdout

use crate::cli::args::{Cli, Shell};
use anyhow::Result;
use clap::CommandFactory;
use std::io::Write;

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
        }
    }
}

/// Print the completion script for `shell`, covering every subcommand.
pub fn completion(shell: Shell) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_completion(shell, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Generate the completion script for `shell` into `out`.
pub(crate) fn write_completion(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(clap_complete::Shell::from(shell), &mut cmd, bin, out);
    Ok(())
}
