//! Shared integration test helpers for richtext.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::write_theme_file;
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use richtext::config::Props;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `contents` to `<tmp>/<file_name>` and returns the path.
///
/// The `TempDir` must be kept alive until the file has been read.
pub fn write_theme_file(file_name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(file_name);
    fs::write(&path, contents).expect("Failed to write theme file");
    (temp_dir, path)
}

/// Unwraps a `json!` object literal into a prop map.
pub fn props(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
