//! Copy orchestrator for clipboard operations.

use tracing::{debug, warn};

use super::error::{ClipboardError, MAX_CONTENT_SIZE};
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::platform_tools;

/// Orchestrates clipboard copies using the available tools.
///
/// Tools are tried in priority order; the first one that succeeds wins.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
    max_bytes: u64,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self::with_tools(platform_tools())
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self {
            tools,
            max_bytes: MAX_CONTENT_SIZE,
        }
    }

    /// Override the size limit.
    pub fn max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn CopyTool>] {
        &self.tools
    }

    /// Copy text to the clipboard.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::EmptyContent);
        }

        let size = text.len() as u64;
        if size > self.max_bytes {
            return Err(ClipboardError::TooLarge {
                size_mb: size as f64 / (1024.0 * 1024.0),
                max_mb: self.max_bytes / (1024 * 1024),
            });
        }

        let mut last_error: Option<String> = None;
        for tool in &self.tools {
            if !tool.is_available() {
                debug!(tool = tool.name(), "clipboard tool unavailable");
                continue;
            }
            match tool.try_copy_text(text) {
                Ok(()) => return Ok(CopyResult::new(tool.method(), text.len())),
                Err(CopyToolError::NotSupported) | Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(msg)) => {
                    warn!(tool = tool.name(), error = %msg, "clipboard tool failed, trying next");
                    last_error = Some(msg);
                }
            }
        }

        if let Some(err) = last_error {
            warn!(error = %err, "all clipboard tools failed");
        }

        Err(ClipboardError::NoToolAvailable)
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}
