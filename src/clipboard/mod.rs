//! Clipboard support for copying output text.
//!
//! Shells out to the platform's clipboard tools: `pbcopy` on macOS,
//! `wl-copy` on Wayland, `xclip` or `xsel` on X11.
//!
//! # Example
//!
//! ```ignore
//! use devmin::clipboard::copy_text_to_clipboard;
//!
//! let result = copy_text_to_clipboard("a{color:red}")?;
//! println!("{}", result.message("minified CSS"));
//! ```

pub mod copy;
mod error;
mod result;
pub mod tool;
pub mod tools;

pub use error::{ClipboardError, MAX_CONTENT_SIZE};
pub use result::{CopyMethod, CopyResult};

use copy::Copy;

/// Copy text to the system clipboard using the first tool that works.
///
/// # Errors
/// - `ClipboardError::EmptyContent` - nothing to copy
/// - `ClipboardError::TooLarge` - text exceeds the size limit
/// - `ClipboardError::NoToolAvailable` - no clipboard tool found or all failed
pub fn copy_text_to_clipboard(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}
