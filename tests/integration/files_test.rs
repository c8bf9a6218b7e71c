//! Integration tests for input reading and output writing

use std::fs;
use std::io;
use std::path::Path;

use devmin::files::{read_file, read_input, write_output, write_output_path};
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, load_fixture};

#[test]
fn read_input_with_path_reads_file() {
    let path = fixtures_dir().join("sample.js");
    assert_eq!(read_input(Some(&path)).unwrap(), load_fixture("sample.js"));
}

#[test]
fn read_file_missing_reports_path() {
    let err = read_file(Path::new("/definitely/not/here.css")).unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.css"));
}

#[test]
fn read_file_rejects_invalid_utf8() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bin.js");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
    assert!(read_file(&path).is_err());
}

#[test]
fn write_output_replaces_atomically() {
    let temp = TempDir::new().unwrap();
    write_output(temp.path(), "minified.css", "old").unwrap();
    let path = write_output(temp.path(), "minified.css", "new").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, ["minified.css"]);
}

#[test]
fn write_output_rejects_traversal() {
    let temp = TempDir::new().unwrap();
    for name in ["", ".", "..", "../x.js", "a/b.js", "a\\b.js"] {
        let err = write_output(temp.path(), name, "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "name {:?}", name);
    }
}

#[test]
fn write_output_path_relative_to_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("build").join("site.min.html");
    write_output_path(&target, "<p>x</p>").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "<p>x</p>");
}
