//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Create a temporary directory with a copy of a fixture
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let fixture_content = load_fixture(name);
    let temp_path = temp_dir.path().join(name);
    fs::write(&temp_path, fixture_content).expect("Failed to write temp fixture");
    (temp_dir, temp_path)
}

/// Write a config file under `home/.config/devmin/config.toml`
pub fn write_config(home: &Path, contents: &str) -> PathBuf {
    let config_dir = home.join(".config").join("devmin");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    let path = config_dir.join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}

/// Expected minified forms of the bundled fixtures
pub const SAMPLE_HTML_MIN: &str =
    "<!DOCTYPE html><html><head><title>Demo</title></head><body><p>Hello world</p></body></html>";
pub const SAMPLE_CSS_MIN: &str =
    "body{margin:0;font-family:sans-serif}.nav a,.nav button{color:#333;padding:4px 8px}";
pub const SAMPLE_JS_MIN: &str = "function add(a,b){return a+b;}const total=add(1,2);";
