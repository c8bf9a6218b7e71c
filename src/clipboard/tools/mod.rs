//! Platform clipboard tools.

mod pbcopy;
mod wl_copy;
mod xclip;
mod xsel;

pub use pbcopy::Pbcopy;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::Write;
use std::process::{Command, Stdio};

use super::tool::{CopyTool, CopyToolError};

/// Tools for the current platform, in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    vec![
        Box::new(Pbcopy::new()),
        Box::new(WlCopy::new()),
        Box::new(Xclip::new()),
        Box::new(Xsel::new()),
    ]
}

/// Check whether an executable is on PATH.
pub(crate) fn command_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Spawn `program` and feed `text` to its stdin.
pub(crate) fn pipe_text(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        // xclip/wl-copy fork a daemon that would hold captured pipes open
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(e.to_string()),
        })?;

    // stdin is dropped at the end of the match so the tool sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    // Always reap the child, even when the write failed
    let status = child.wait();
    written.map_err(|e| CopyToolError::Failed(e.to_string()))?;
    let status = status.map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!(
            "{} exited with {}",
            program, status
        )))
    }
}
