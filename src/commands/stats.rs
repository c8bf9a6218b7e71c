//! Stats command handler

use anyhow::{Context, Result};
use std::path::Path;

use devmin::files::read_file;
use devmin::theme::current_theme;
use devmin::SizeStats;

/// Compare an original file with its compact form.
pub fn handle(original: &Path, compact: &Path, json: bool) -> Result<()> {
    let stats = compare(original, compact)?;

    if json {
        let out = serde_json::to_string_pretty(&stats).context("Failed to encode JSON")?;
        println!("{}", out);
    } else {
        let theme = current_theme();
        println!("{}", theme.primary_text(&stats.summary()));
    }
    Ok(())
}

/// Size stats for two files on disk.
pub(crate) fn compare(original: &Path, compact: &Path) -> Result<SizeStats> {
    let original = read_file(original)?;
    let compact = read_file(compact)?;
    Ok(SizeStats::compute(&original, &compact))
}
