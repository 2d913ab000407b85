//! Manifest file detection and inspection
//!
//! This module provides functionality to:
//! - Find every go.mod below a root directory
//! - Read the pinned version of a dependency from a go.mod

mod detector;
mod go_mod;

pub use detector::{detect_manifests, ManifestScanner};
pub use go_mod::{find_dependency_version, read_dependency_version, MatchMode};
