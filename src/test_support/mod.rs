//! Test utilities for raygen unit tests.
//!
//! Provides sample API descriptions and a scratch workspace that writes them
//! to disk for tests that exercise the file-based driver.
//!
//! # Example
//!
//! ```rust,ignore
//! use raygen::test_support::{DescriptionWorkspace, RAYLIB_SAMPLE};
//!
//! #[test]
//! fn test_example() {
//!     let ws = DescriptionWorkspace::new();
//!     let input = ws.write_description("raylib_api.json", RAYLIB_SAMPLE);
//!     // Generate from `input` into `ws.path()`...
//! }
//! ```

pub mod fixtures;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub use fixtures::*;

/// A temporary directory holding description files and generated output.
#[derive(Debug)]
pub struct DescriptionWorkspace {
    dir: TempDir,
}

impl DescriptionWorkspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        DescriptionWorkspace {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the workspace.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a description file and return its path.
    pub fn write_description(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Read a generated file relative to the workspace root.
    pub fn read(&self, relative: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.dir.path().join(relative)).unwrap()
    }
}

impl Default for DescriptionWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
