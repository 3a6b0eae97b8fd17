//! Application tree scanner.
//!
//! The snapshot names module and package directories relative to the
//! application root; the scanner resolves those paths and lists what is
//! actually on disk. Scan failures degrade to diagnostic listings
//! rather than aborting the report.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Result of listing a configured directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirListing {
    /// The path does not exist or is not a directory.
    Missing,
    /// The directory exists but holds no subdirectories.
    Empty,
    /// Subdirectory names, sorted.
    Entries(Vec<String>),
}

/// Resolves snapshot paths against the application root and inspects them.
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a snapshot path: absolute paths pass through, relative
    /// paths are joined to the application root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// List the subdirectory names under a configured directory.
    ///
    /// Names are sorted so repeated scans of the same tree produce the
    /// same report.
    pub fn subdirectories(&self, path: impl AsRef<Path>) -> DirListing {
        let dir = self.resolve(path);
        if !dir.is_dir() {
            return DirListing::Missing;
        }

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("failed to read directory {}: {}", dir.display(), e);
                return DirListing::Missing;
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();

        if names.is_empty() {
            return DirListing::Empty;
        }
        names.sort();
        DirListing::Entries(names)
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path).is_dir()
    }

    pub fn is_file(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path).is_file()
    }
}
