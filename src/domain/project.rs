//! Project discovered from a manifest file

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A project rooted at the directory holding its manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project directory
    pub dir: PathBuf,
    /// Path to the manifest file
    pub manifest: PathBuf,
    /// Display name, the final segment of the directory
    pub name: String,
}

impl Project {
    /// Creates a project from the path of its manifest file
    pub fn from_manifest(manifest: impl Into<PathBuf>) -> Self {
        let manifest = manifest.into();
        let dir = manifest
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let name = display_name(&dir);
        Self {
            dir,
            manifest,
            name,
        }
    }

    /// Path of a file inside the project directory
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Returns true if the named file exists in the project directory
    pub fn has_file(&self, name: &str) -> bool {
        self.file(name).exists()
    }
}

fn display_name(dir: &Path) -> String {
    match dir.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        // "." or "/" have no final segment
        None => dir.display().to_string(),
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
