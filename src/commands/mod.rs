//! Command handlers for the devmin CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod beautify;
pub mod completions;
pub mod config;
pub mod interactive;
pub mod minify;
pub mod stats;

use anyhow::{bail, Result};
use std::path::Path;

use devmin::clipboard::copy::Copy;
use devmin::{Config, Domain};

/// Pick the domain from the flag, or infer it from the file extension.
pub fn resolve_domain(flag: Option<Domain>, file: Option<&Path>) -> Result<Domain> {
    if let Some(domain) = flag {
        return Ok(domain);
    }

    match file.filter(|p| *p != Path::new("-")) {
        Some(path) => match Domain::from_path(path) {
            Some(domain) => Ok(domain),
            None => bail!(
                "Cannot tell the language of {} from its extension.\nHint: pass --domain html, css or js",
                path.display()
            ),
        },
        None => bail!("Reading stdin needs a language.\nHint: pass --domain html, css or js"),
    }
}

/// Clipboard orchestrator honoring the configured size limit.
pub fn clipboard_for(config: &Config) -> Copy {
    Copy::new().max_bytes(config.clipboard_max_bytes())
}
