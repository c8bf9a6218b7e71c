//! Clipboard copy outcome types.

use humansize::{format_size, BINARY};

/// Which tool performed the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Pbcopy,
    WlCopy,
    Xclip,
    Xsel,
}

impl CopyMethod {
    /// Executable name of the tool.
    pub fn name(&self) -> &'static str {
        match self {
            CopyMethod::Pbcopy => "pbcopy",
            CopyMethod::WlCopy => "wl-copy",
            CopyMethod::Xclip => "xclip",
            CopyMethod::Xsel => "xsel",
        }
    }
}

/// A successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub tool: CopyMethod,
    pub size_bytes: usize,
}

impl CopyResult {
    pub fn new(tool: CopyMethod, size_bytes: usize) -> Self {
        Self { tool, size_bytes }
    }

    /// User-facing confirmation, e.g. `Copied minified CSS to clipboard (12 B via xclip)`.
    pub fn message(&self, what: &str) -> String {
        format!(
            "Copied {} to clipboard ({} via {})",
            what,
            format_size(self.size_bytes, BINARY),
            self.tool.name()
        )
    }
}
