//! `iiotstack completions`: generate shell completion scripts.
//!
//! Usage:
//!   iiotstack completions bash > ~/.bash_completion.d/iiotstack
//!   iiotstack completions zsh

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    render(shell, &mut io::stdout());
    Ok(())
}

fn render(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "iiotstack", out);
}
