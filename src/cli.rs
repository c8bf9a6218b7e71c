//! CLI definitions for devmin
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;
use std::sync::LazyLock;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::domain::Domain;

/// Version string, with the git SHA appended on development builds.
static VERSION: LazyLock<String> = LazyLock::new(|| {
    let version = env!("CARGO_PKG_VERSION");
    if cfg!(feature = "release") {
        return version.to_string();
    }
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => format!("{} ({})", version, sha),
        _ => version.to_string(),
    }
});

/// The `--version` text.
pub fn version() -> &'static str {
    VERSION.as_str()
}

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "devmin")]
#[command(about = "[ devmin ] - minify and beautify HTML, CSS and JavaScript")]
#[command(
    long_about = "devmin - quick regex-based minifier and beautifier for HTML, CSS and JavaScript.

devmin strips comments and collapses whitespace to shrink front-end sources,
reports how many bytes were saved, and can re-expand compact code into a
readable layout. It is a fast approximation, not a parser: string and regex
literals are not protected.

QUICK START:
    devmin minify style.css             Print minified CSS and the savings
    cat app.js | devmin minify -d js    Minify from stdin
    devmin minify index.html --save     Write ./minified.html
    devmin beautify bundle.min.css      Re-expand compact CSS
    devmin interactive                  Line-based session for all three domains

Configuration lives in ~/.config/devmin/config.toml (see 'devmin config show')."
)]
#[command(version = version())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Minify a file or stdin
    #[command(long_about = "Minify HTML, CSS or JavaScript.

Comments are removed and whitespace collapsed. The domain is taken from
--domain or inferred from the file extension (.html/.htm, .css, .js/.mjs/.cjs).
Without FILE (or with '-') the source is read from stdin.

The size readout is printed to stderr so stdout stays pipeable.

EXAMPLES:
    devmin minify style.css                   Print minified CSS
    devmin minify app.js -o app.min.js        Write to a file
    devmin minify index.html --save           Write minified.html to the output directory
    devmin minify -d css --copy < a.css       Minify stdin and copy the result
    devmin minify app.js --json               Emit {domain, output, stats} as JSON

OUTPUT:
    Original: 1.20 KB | Minified: 0.80 KB | Saved: 33%")]
    Minify {
        /// Source file ('-' or omitted for stdin)
        #[arg(help = "Source file ('-' or omitted reads stdin)")]
        file: Option<PathBuf>,
        /// Source language
        #[arg(short, long, value_enum, help = "Source language (html, css, js)")]
        domain: Option<Domain>,
        /// Write output to this path instead of stdout
        #[arg(short, long, help = "Write output to PATH instead of stdout")]
        output: Option<PathBuf>,
        /// Save as minified.<ext> in the configured output directory
        #[arg(long, help = "Save as minified.<ext> in the output directory")]
        save: bool,
        /// Copy the output to the system clipboard
        #[arg(long, help = "Copy the output to the clipboard")]
        copy: bool,
        /// Do not print the size readout
        #[arg(long, help = "Do not print the size readout")]
        no_stats: bool,
        /// Print a JSON object instead of raw text
        #[arg(long, help = "Print {domain, output, stats} as JSON")]
        json: bool,
    },

    /// Beautify compact code
    #[command(long_about = "Re-expand compact HTML, CSS or JavaScript onto multiple lines.

Line breaks and two-space indents are inserted around tags, braces and
semicolons. Nesting depth is not tracked, so deeply nested code stays flat.

EXAMPLES:
    devmin beautify bundle.min.css
    devmin minify app.js | devmin beautify -d js")]
    Beautify {
        /// Compact source file ('-' or omitted for stdin)
        #[arg(help = "Source file ('-' or omitted reads stdin)")]
        file: Option<PathBuf>,
        /// Source language
        #[arg(short, long, value_enum, help = "Source language (html, css, js)")]
        domain: Option<Domain>,
        /// Write output to this path instead of stdout
        #[arg(short, long, help = "Write output to PATH instead of stdout")]
        output: Option<PathBuf>,
        /// Copy the output to the system clipboard
        #[arg(long, help = "Copy the output to the clipboard")]
        copy: bool,
    },

    /// Compare the sizes of two files
    #[command(long_about = "Show the size readout for an original file and its compact form.

EXAMPLE:
    devmin stats style.css style.min.css

OUTPUT:
    Original: 1.20 KB | Minified: 0.80 KB | Saved: 33%")]
    Stats {
        /// Original file
        #[arg(help = "Original file")]
        original: PathBuf,
        /// Compact file
        #[arg(help = "Compact file")]
        compact: PathBuf,
        /// Print the stats as JSON
        #[arg(long, help = "Print the stats as JSON")]
        json: bool,
    },

    /// Line-based interactive session
    #[command(
        visible_alias = "repl",
        long_about = "Start a line-based session holding separate HTML, CSS and JavaScript buffers.

Plain lines are appended to the active buffer. Commands start with ':'.

COMMANDS:
    :html :css :js     Switch the active buffer
    :load FILE         Replace the buffer with a file's contents
    :clear             Empty the buffer and its output
    :minify            Minify the buffer and show the size readout
    :beautify          Re-expand the last output
    :show              Print the last output
    :source            Print the buffer
    :stats             Print the last size readout
    :copy              Copy the last output to the clipboard
    :save [NAME]       Write the last output (default minified.<ext>)
    :help              List commands
    :quit              Leave the session

EXAMPLE:
    devmin interactive -d css"
    )]
    Interactive {
        /// Buffer to start on
        #[arg(short, long, value_enum, help = "Buffer to start on (default: html)")]
        domain: Option<Domain>,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and edit the devmin configuration file.

Configuration is stored in ~/.config/devmin/config.toml and covers the output
directory, download file stem, stats display, stale output policy and the
clipboard size limit.

EXAMPLES:
    devmin config show          Display current configuration
    devmin config edit          Open config in $EDITOR"
    )]
    Config(ConfigCommands),

    /// Generate shell completions (internal use)
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Option<CompletionShell>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the current configuration in TOML format.

Missing settings are shown with their defaults.

EXAMPLE:
    devmin config show")]
    Show,
    /// Open configuration file in your default editor
    #[command(long_about = "Open the configuration file in your default editor.

Uses the $EDITOR environment variable (defaults to 'vi').
Config file location: ~/.config/devmin/config.toml

EXAMPLE:
    devmin config edit
    EDITOR=nano devmin config edit")]
    Edit,
}
