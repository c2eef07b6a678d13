// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path to a file under `tests/fixtures`
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write `content` to a recipe file in a fresh temp directory.
///
/// Returns (TempDir, recipe_path) - keep the TempDir alive to prevent cleanup.
pub fn write_recipe(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("conanfile.toml");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
