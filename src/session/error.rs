//! Session errors.

use std::fmt;

use crate::clipboard::ClipboardError;
use crate::domain::Domain;

/// User action that can be refused for lack of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Minify,
    Beautify,
    Copy,
    Save,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Minify => "minify",
            Action::Beautify => "beautify",
            Action::Copy => "copy",
            Action::Save => "save",
        })
    }
}

/// Errors raised by [`super::Session`] operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No source (minify) or no prior output (everything else).
    #[error("Nothing to {action}: {}", empty_hint(.domain, .action))]
    EmptyInput { domain: Domain, action: Action },

    /// The expander failed; session state was left untouched.
    #[error("Could not beautify {domain}: {reason}")]
    TransformFailure { domain: Domain, reason: String },

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Failed to save output: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Advisory errors are reported to the user and the session carries on.
    pub fn is_advisory(&self) -> bool {
        matches!(
            self,
            SessionError::EmptyInput { .. } | SessionError::TransformFailure { .. }
        )
    }
}

fn empty_hint(domain: &Domain, action: &Action) -> String {
    match action {
        Action::Minify => format!("enter some {} first", domain.label()),
        _ => format!("minify some {} first", domain.label()),
    }
}
