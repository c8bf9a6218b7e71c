//! ANSI color helpers and CLI text formatting
//!
//! Color conversion from clap's ANSI palette, terminal detection and
//! themed text wrappers.

use clap::builder::styling::AnsiColor;

use super::Theme;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert an ANSI palette color to its foreground escape code.
pub fn color_to_ansi(color: AnsiColor) -> &'static str {
    match color {
        AnsiColor::Black => "\x1b[30m",
        AnsiColor::Red => "\x1b[31m",
        AnsiColor::Green => "\x1b[32m",
        AnsiColor::Yellow => "\x1b[33m",
        AnsiColor::Blue => "\x1b[34m",
        AnsiColor::Magenta => "\x1b[35m",
        AnsiColor::Cyan => "\x1b[36m",
        AnsiColor::White => "\x1b[37m",
        AnsiColor::BrightBlack => "\x1b[90m",
        AnsiColor::BrightRed => "\x1b[91m",
        AnsiColor::BrightGreen => "\x1b[92m",
        AnsiColor::BrightYellow => "\x1b[93m",
        AnsiColor::BrightBlue => "\x1b[94m",
        AnsiColor::BrightMagenta => "\x1b[95m",
        AnsiColor::BrightCyan => "\x1b[96m",
        AnsiColor::BrightWhite => "\x1b[97m",
    }
}

/// Whether `stream` should receive color escape codes.
pub fn colors_enabled_for(stream: atty::Stream) -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(stream)
}

/// Whether stdout should receive color escape codes.
pub fn colors_enabled() -> bool {
    colors_enabled_for(atty::Stream::Stdout)
}

impl Theme {
    fn paint(&self, color: AnsiColor, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}
