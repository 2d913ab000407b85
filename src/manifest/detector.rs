//! Manifest file detection across a directory tree
//!
//! Walks the whole subtree below the root (no depth limit, symlinks are not
//! followed) and yields every file whose name is exactly the manifest name.
//! The walk is lazy: manifests are produced one at a time so the caller can
//! process a project before the next one is found.

use crate::error::UpdaterError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazy iterator over manifest files under a root directory
pub struct ManifestScanner {
    entries: walkdir::IntoIter,
    manifest_name: String,
    failed: bool,
}

impl ManifestScanner {
    /// Create a scanner for files named `manifest_name` below `root`
    pub fn new(root: impl AsRef<Path>, manifest_name: impl Into<String>) -> Self {
        let entries = WalkDir::new(root.as_ref())
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Self {
            entries,
            manifest_name: manifest_name.into(),
            failed: false,
        }
    }
}

impl Iterator for ManifestScanner {
    type Item = Result<PathBuf, UpdaterError>;

    fn next(&mut self) -> Option<Self::Item> {
        // A traversal error ends the scan for good.
        if self.failed {
            return None;
        }

        for entry in self.entries.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.failed = true;
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    return Some(Err(UpdaterError::scan(path, err)));
                }
            };

            if !entry.file_type().is_dir() && entry.file_name() == self.manifest_name.as_str() {
                return Some(Ok(entry.into_path()));
            }
        }

        None
    }
}

/// Detect all manifest files below the given directory, eagerly
pub fn detect_manifests(
    root: &Path,
    manifest_name: &str,
) -> Result<Vec<PathBuf>, UpdaterError> {
    ManifestScanner::new(root, manifest_name).collect()
}
