//! Dependency reference read from a manifest

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used when the manifest could not be read
pub const VERSION_UNKNOWN: &str = "Unknown";

/// Label used when the manifest does not mention the dependency
pub const VERSION_NOT_FOUND: &str = "NotFound";

/// Pinned version of a dependency as found in a manifest
///
/// Versions are opaque tokens: they are compared for equality only and never
/// parsed as semver, so downgrades look exactly like upgrades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "version", rename_all = "snake_case")]
pub enum DependencyVersion {
    /// The manifest could not be read
    Unknown,
    /// The manifest was read but no usable line names the dependency
    NotFound,
    /// The token following the dependency name, verbatim
    Found(String),
}

impl DependencyVersion {
    /// Returns the version token, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DependencyVersion::Found(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the display label: the token itself or the classification name
    pub fn label(&self) -> &str {
        match self {
            DependencyVersion::Unknown => VERSION_UNKNOWN,
            DependencyVersion::NotFound => VERSION_NOT_FOUND,
            DependencyVersion::Found(v) => v,
        }
    }
}

impl fmt::Display for DependencyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(DependencyVersion::Unknown.label(), "Unknown");
        assert_eq!(DependencyVersion::NotFound.label(), "NotFound");
        assert_eq!(DependencyVersion::Found("v1.2.0".into()).label(), "v1.2.0");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(DependencyVersion::Unknown.as_str(), None);
        assert_eq!(DependencyVersion::NotFound.as_str(), None);
        assert_eq!(DependencyVersion::Found("v0.0.1".into()).as_str(), Some("v0.0.1"));
    }

    #[test]
    fn test_found_token_that_looks_like_a_label_is_still_known() {
        // A literal "Unknown" token in a manifest is a real version token.
        let version = DependencyVersion::Found("Unknown".into());
        assert_eq!(version.as_str(), Some("Unknown"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&DependencyVersion::Found("v1.0.0".into())).unwrap();
        assert_eq!(json, r#"{"state":"found","version":"v1.0.0"}"#);
        let json = serde_json::to_string(&DependencyVersion::NotFound).unwrap();
        assert_eq!(json, r#"{"state":"not_found"}"#);
    }
}
