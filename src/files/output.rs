//! Writing minified output to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `contents` to `dir/file_name`, creating `dir` if needed.
///
/// Writes to a hidden temp file in the same directory and renames it over
/// the target, so an interrupted write never leaves a truncated file.
pub fn write_output(dir: &Path, file_name: &str, contents: &str) -> io::Result<PathBuf> {
    validate_file_name(file_name)?;
    fs::create_dir_all(dir)?;

    let path = dir.join(file_name);
    let temp_path = dir.join(format!(".{}.tmp", file_name));

    fs::write(&temp_path, contents)?;
    if let Err(e) = fs::rename(&temp_path, &path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(path)
}

/// Write `contents` to an explicit path, atomically.
pub fn write_output_path(path: &Path, contents: &str) -> io::Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid output path: '{}'", path.display()),
            )
        })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    write_output(dir, file_name, contents)
}

/// Reject names that would escape the output directory.
fn validate_file_name(file_name: &str) -> io::Result<()> {
    let invalid = file_name.is_empty()
        || file_name == "."
        || file_name == ".."
        || file_name.contains('/')
        || file_name.contains('\\');
    if invalid {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid output file name: '{}'", file_name),
        ));
    }
    Ok(())
}
