//! Reading source text from files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Read source text from `path`, or from stdin when `path` is `None` or `-`.
///
/// Refuses to block on an interactive terminal when no path was given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => read_file(p),
        Some(_) => read_stdin(),
        None => {
            if atty::is(atty::Stream::Stdin) {
                bail!("No input given.\nHint: pass a file path, or pipe text in (e.g. 'cat style.css | devmin minify -d css')");
            }
            read_stdin()
        }
    }
}

/// Read a whole file as UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}
