//! Text domains handled by the minifier.
//!
//! Each domain selects a rule set and carries the metadata needed to save
//! its output: file extension, media type and default download name.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stem used for saved output when nothing else is configured.
pub const DEFAULT_FILE_STEM: &str = "minified";

/// One of the three text kinds the pipeline operates on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// HTML markup
    #[value(name = "html", alias = "markup")]
    #[serde(rename = "html", alias = "markup")]
    Markup,
    /// CSS stylesheets
    #[value(name = "css", alias = "stylesheet")]
    #[serde(rename = "css", alias = "stylesheet")]
    Stylesheet,
    /// JavaScript
    #[value(name = "js", alias = "script", alias = "javascript")]
    #[serde(rename = "js", alias = "script", alias = "javascript")]
    Script,
}

impl Domain {
    /// All domains in display order.
    pub const ALL: [Domain; 3] = [Domain::Markup, Domain::Stylesheet, Domain::Script];

    /// Short name used on the command line and in JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Domain::Markup => "html",
            Domain::Stylesheet => "css",
            Domain::Script => "js",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Domain::Markup => "HTML",
            Domain::Stylesheet => "CSS",
            Domain::Script => "JavaScript",
        }
    }

    /// File extension for saved output (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            Domain::Markup => "html",
            Domain::Stylesheet => "css",
            Domain::Script => "js",
        }
    }

    /// Media type for saved output.
    pub fn media_type(self) -> &'static str {
        match self {
            Domain::Markup => "text/html",
            Domain::Stylesheet => "text/css",
            Domain::Script => "text/javascript",
        }
    }

    /// Download filename built from `stem` and this domain's extension.
    pub fn file_name(self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }

    /// Default download filename (`minified.<ext>`).
    pub fn default_file_name(self) -> String {
        self.file_name(DEFAULT_FILE_STEM)
    }

    /// Infer the domain from a path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "html" | "htm" => Some(Domain::Markup),
            "css" => Some(Domain::Stylesheet),
            "js" | "mjs" | "cjs" => Some(Domain::Script),
            _ => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a domain name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown domain '{0}'. Expected one of: html, css, js")]
pub struct UnknownDomain(pub String);

impl FromStr for Domain {
    type Err = UnknownDomain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" | "markup" => Ok(Domain::Markup),
            "css" | "stylesheet" => Ok(Domain::Stylesheet),
            "js" | "script" | "javascript" => Ok(Domain::Script),
            _ => Err(UnknownDomain(s.to_string())),
        }
    }
}
