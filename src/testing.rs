//! Testing utilities for asset-picker
//!
//! Fixture helpers for unit tests: an in-memory sample group and a
//! temporary directory of fake media files.
//!
//! Only available when compiled with `cfg(test)`.

use crate::assets::{Asset, AssetGroup, MediaKind};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Build a complete group of photos with the given identifiers
///
/// Each asset's thumbnail is `<id>.jpg`.
#[must_use]
pub fn sample_group(ids: &[&str]) -> AssetGroup {
    let assets = ids
        .iter()
        .map(|id| Asset::new(*id, format!("{id}.jpg"), MediaKind::Photo))
        .collect();
    AssetGroup::with_assets("sample", assets)
}

/// Temporary directory populated with empty files
///
/// The directory and its contents are removed when the wrapper is dropped.
pub struct TestMediaDir {
    dir: TempDir,
}

impl TestMediaDir {
    /// Create a directory containing one empty file per name
    ///
    /// # Panics
    /// Panics if the directory or a file cannot be created.
    #[must_use]
    pub fn new(file_names: &[&str]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for name in file_names {
            fs::write(dir.path().join(name), b"").expect("Failed to create test file");
        }
        Self { dir }
    }

    /// Path of the directory
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
