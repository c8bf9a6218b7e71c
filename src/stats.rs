//! Size comparison between original and minified text.

use serde::{Deserialize, Serialize};

/// Byte sizes of an original text and its compact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeStats {
    pub original_bytes: usize,
    pub compact_bytes: usize,
    /// Rounded percentage saved. Negative when the output grew.
    pub savings_percent: i64,
}

impl SizeStats {
    /// Compare two texts by UTF-8 byte length.
    pub fn compute(original: &str, compact: &str) -> Self {
        Self::from_sizes(original.len(), compact.len())
    }

    /// Build stats from raw byte counts.
    ///
    /// An empty original yields 0% rather than a division by zero.
    pub fn from_sizes(original_bytes: usize, compact_bytes: usize) -> Self {
        let savings_percent = if original_bytes == 0 {
            0
        } else {
            let ratio = compact_bytes as f64 / original_bytes as f64;
            ((1.0 - ratio) * 100.0).round() as i64
        };

        Self {
            original_bytes,
            compact_bytes,
            savings_percent,
        }
    }

    pub fn original_kb(&self) -> f64 {
        self.original_bytes as f64 / 1024.0
    }

    pub fn compact_kb(&self) -> f64 {
        self.compact_bytes as f64 / 1024.0
    }

    /// Bytes removed (zero when the output grew).
    pub fn saved_bytes(&self) -> usize {
        self.original_bytes.saturating_sub(self.compact_bytes)
    }

    /// Whether there is anything worth showing.
    pub fn is_displayable(&self) -> bool {
        self.original_bytes > 0
    }

    /// One-line readout, e.g. `Original: 1.20 KB | Minified: 0.80 KB | Saved: 33%`.
    pub fn summary(&self) -> String {
        format!(
            "Original: {:.2} KB | Minified: {:.2} KB | Saved: {}%",
            self.original_kb(),
            self.compact_kb(),
            self.savings_percent
        )
    }
}
