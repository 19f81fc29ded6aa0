//! Shell completion generation

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Write the completion script for `shell` to `out`.
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, out);
}

/// Run the completion command
pub fn run(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}
