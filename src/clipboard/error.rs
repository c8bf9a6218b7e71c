//! Clipboard operation errors.

/// Default maximum text size accepted for a clipboard copy (10 MB).
pub const MAX_CONTENT_SIZE: u64 = 10 * 1024 * 1024;

/// Errors that can occur during clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Nothing to copy")]
    EmptyContent,

    #[error("No clipboard tool available. On Linux, install wl-copy, xclip, or xsel.")]
    NoToolAvailable,

    #[error("Text too large for clipboard ({size_mb:.1} MB). Maximum is {max_mb} MB.")]
    TooLarge { size_mb: f64, max_mb: u64 },
}
