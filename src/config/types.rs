//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_FILE_STEM;
use crate::session::StaleOutputPolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Where saved output goes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for `--save` / `:save` (supports `~/`)
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Filename stem; the domain extension is appended
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
}

pub fn default_directory() -> String {
    ".".to_string()
}

pub fn default_file_stem() -> String {
    DEFAULT_FILE_STEM.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            file_stem: default_file_stem(),
        }
    }
}

/// Size readout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Print the size comparison after minifying
    #[serde(default = "default_show_stats")]
    pub show: bool,
}

pub fn default_show_stats() -> bool {
    true
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            show: default_show_stats(),
        }
    }
}

/// Interactive session settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// What happens to computed output when the source is edited
    #[serde(default)]
    pub stale_output: StaleOutputPolicy,
}

/// Clipboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Largest text (in MB) handed to a clipboard tool
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: u64,
}

pub fn default_max_size_mb() -> u64 {
    10
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            max_size_mb: default_max_size_mb(),
        }
    }
}
