//! devmin - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use devmin::cli::{Cli, Commands, ConfigCommands};
use devmin::theme::stderr_theme;
use devmin::SessionError;

use commands::minify::MinifyOptions;

fn main() {
    let cli = Cli::parse();
    devmin::logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        report_error(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Minify {
            file,
            domain,
            output,
            save,
            copy,
            no_stats,
            json,
        } => commands::minify::handle(
            file.as_deref(),
            domain,
            output.as_deref(),
            MinifyOptions {
                save,
                copy,
                no_stats,
                json,
            },
        ),
        Commands::Beautify {
            file,
            domain,
            output,
            copy,
        } => commands::beautify::handle(file.as_deref(), domain, output.as_deref(), copy),
        Commands::Stats {
            original,
            compact,
            json,
        } => commands::stats::handle(&original, &compact, json),
        Commands::Interactive { domain } => commands::interactive::handle(domain),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

/// Print an error on stderr, advisory ones without the `Error:` prefix.
fn report_error(err: &anyhow::Error) {
    let theme = stderr_theme();
    let advisory = err
        .downcast_ref::<SessionError>()
        .is_some_and(SessionError::is_advisory);

    if advisory {
        eprintln!("{}", theme.error_text(&err.to_string()));
    } else {
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", err)));
    }
}
