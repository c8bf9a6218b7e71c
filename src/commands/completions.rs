//! Completions command handler

use anyhow::{bail, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io::{self, Write};

/// Handle completions command.
///
/// Prints a clap-generated completion script for the requested shell.
#[cfg(not(tarpaulin_include))]
pub fn handle<C: CommandFactory>(shell_arg: Option<CompletionShell>) -> Result<()> {
    match shell_arg {
        Some(shell) => generate_completions::<C>(shell, &mut io::stdout()),
        None => bail!("Usage: devmin completions --shell <bash|zsh|fish|powershell|elvish>"),
    }
}

/// Generate shell completion script.
pub(crate) fn generate_completions<C: CommandFactory>(
    shell: CompletionShell,
    out: &mut dyn Write,
) -> Result<()> {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "devmin", out);
    Ok(())
}
