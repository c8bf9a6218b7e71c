//! xtask - Build tasks for devmin
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use devmin::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for devmin")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // No specific format means both
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

fn visible_subcommands(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands().filter(|c| !c.is_hide_set())
}

fn is_builtin(arg: &Arg) -> bool {
    matches!(arg.get_id().as_str(), "help" | "version")
}

/// Render one man page into `dir/<name>.1`.
fn write_man_page(dir: &Path, name: &str, cmd: Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    let path = dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    write_man_page(&man_dir, "devmin", cmd.clone())?;

    for subcommand in visible_subcommands(&cmd) {
        let name = format!("devmin-{}", subcommand.get_name());
        write_man_page(&man_dir, &name, subcommand.clone())?;

        for nested in visible_subcommands(subcommand) {
            let nested_name = format!("{}-{}", name, nested.get_name());
            write_man_page(&man_dir, &nested_name, nested.clone())?;
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Append `### Arguments` / `### Options` lists for a command.
fn push_arguments(markdown: &mut String, cmd: &Command) {
    let args: Vec<_> = cmd.get_arguments().filter(|a| !is_builtin(a)).collect();

    let positional: Vec<_> = args.iter().filter(|a| a.is_positional()).collect();
    if !positional.is_empty() {
        markdown.push_str("### Arguments\n\n");
        for arg in positional {
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            markdown.push_str(&format!(
                "- `<{}>`: {}\n",
                arg.get_id().as_str().to_uppercase(),
                help
            ));
        }
        markdown.push('\n');
    }

    let options: Vec<_> = args
        .iter()
        .filter(|a| !a.is_positional() && !a.is_global_set())
        .collect();
    if !options.is_empty() {
        markdown.push_str("### Options\n\n");
        for arg in options {
            let long = arg.get_long().map(|l| format!("--{}", l));
            let short = arg.get_short().map(|s| format!("-{}", s));
            let flag = match (long, short) {
                (Some(l), Some(s)) => format!("{}, {}", s, l),
                (Some(l), None) => l,
                (None, Some(s)) => s,
                _ => continue,
            };
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            markdown.push_str(&format!("- `{}`: {}\n", flag, help));
        }
        markdown.push('\n');
    }
}

fn push_long_about(markdown: &mut String, cmd: &Command) {
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", long_about));
        markdown.push_str("```\n\n");
    }
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# devmin Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("## Table of Contents\n\n");
    for subcommand in visible_subcommands(&cmd) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("- [{}](#devmin-{})\n", name, name));
    }
    markdown.push_str("\n---\n\n");

    markdown.push_str("## devmin\n\n");
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    push_long_about(&mut markdown, &cmd);

    for subcommand in visible_subcommands(&cmd) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("## devmin {}\n\n", name));

        if let Some(about) = subcommand.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }
        push_arguments(&mut markdown, subcommand);

        if subcommand.get_long_about().is_some() {
            markdown.push_str("### Description\n\n");
            push_long_about(&mut markdown, subcommand);
        }

        let nested: Vec<_> = visible_subcommands(subcommand).collect();
        if !nested.is_empty() {
            markdown.push_str("### Subcommands\n\n");
            for nested_cmd in nested {
                markdown.push_str(&format!(
                    "#### devmin {} {}\n\n",
                    name,
                    nested_cmd.get_name()
                ));
                if let Some(about) = nested_cmd.get_about() {
                    markdown.push_str(&format!("{}\n\n", about));
                }
                push_long_about(&mut markdown, nested_cmd);
            }
        }

        markdown.push_str("---\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
