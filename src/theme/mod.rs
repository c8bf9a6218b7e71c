//! Theme configuration for CLI output
//!
//! Centralizes color definitions so every command renders status lines,
//! errors, and the interactive prompt the same way.

use clap::builder::styling::AnsiColor;

pub mod cli;

pub use cli::{color_to_ansi, colors_enabled, colors_enabled_for, ANSI_RESET};

/// Theme configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: AnsiColor,
    /// Secondary/dimmed text color
    pub text_secondary: AnsiColor,
    /// Accent color for prompts and headers
    pub accent: AnsiColor,
    /// Error/warning color
    pub error: AnsiColor,
    /// Success color
    pub success: AnsiColor,
    /// When false every helper returns the text unchanged
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// devmin theme - light gray text with green accent.
    pub fn standard() -> Self {
        Self {
            text_primary: AnsiColor::White,
            text_secondary: AnsiColor::BrightBlack,
            accent: AnsiColor::BrightGreen,
            error: AnsiColor::Red,
            success: AnsiColor::BrightGreen,
            enabled: true,
        }
    }

    /// Same palette, no escape codes.
    pub fn plain() -> Self {
        Self::with_colors(false)
    }

    /// Standard palette, colored or not.
    pub fn with_colors(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::standard()
        }
    }
}

/// Theme for text written to stdout.
///
/// Colors are dropped when `NO_COLOR` is set or stdout is not a terminal.
pub fn current_theme() -> Theme {
    Theme::with_colors(colors_enabled())
}

/// Theme for status lines and errors written to stderr.
pub fn stderr_theme() -> Theme {
    Theme::with_colors(colors_enabled_for(atty::Stream::Stderr))
}
