//! devmin Library
//!
//! Regex-driven minify and beautify passes for HTML, CSS and JavaScript,
//! plus the session, clipboard and file plumbing behind the `devmin` CLI.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod domain;
pub mod files;
pub mod logging;
pub mod minify;
pub mod session;
pub mod stats;
pub mod theme;

pub use clipboard::{ClipboardError, CopyResult};
pub use config::Config;
pub use domain::Domain;
pub use minify::{beautify, minify, minify_with_stats, MinifyOutcome};
pub use session::{beautify_text, Session, SessionError, StaleOutputPolicy};
pub use stats::SizeStats;
