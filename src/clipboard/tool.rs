//! Clipboard tool abstraction.

use super::result::CopyMethod;

/// Why a single tool could not copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// The tool exists but can't handle this request.
    NotSupported,
    /// The tool's executable is missing.
    NotFound,
    /// The tool ran and failed.
    Failed(String),
}

/// A platform clipboard tool (pbcopy, xclip, ...).
pub trait CopyTool {
    fn method(&self) -> CopyMethod;

    /// Display name, defaults to the executable name.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Whether the tool can run on this machine right now.
    fn is_available(&self) -> bool;

    /// Put `text` on the clipboard.
    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}
