//! Test utilities for minuta
//!
//! Shared helpers for the workspace's unit, integration and CLI tests.

pub mod fixtures;

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Keeps test output in one gitignored place. The directory is removed when
/// the returned `TempDir` is dropped.
///
/// # Panics
///
/// Panics if the current directory is unavailable or `.tmp/` cannot be
/// created.
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Fallible variant of [`temp_dir_in_workspace`]
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let tmp_base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}
