//! Upgrade judgment for a single project
//!
//! A project needs upgrading iff its manifest pins a known version of the
//! dependency and that version differs from the target. Versions are opaque:
//! no ordering is applied, so moving to an older target is an upgrade too.

use crate::domain::DependencyVersion;

/// Result of comparing the current version with the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeDecision {
    /// Current version is known and differs from the target
    Upgrade {
        /// Version found in the manifest
        from: String,
    },
    /// Unknown, not found, or already at the target
    NoUpgrade,
}

/// Decide whether `current` must be moved to `target`
pub fn judge(current: &DependencyVersion, target: &str) -> UpgradeDecision {
    match current.as_str() {
        Some(version) if version != target => UpgradeDecision::Upgrade {
            from: version.to_string(),
        },
        _ => UpgradeDecision::NoUpgrade,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(v: &str) -> DependencyVersion {
        DependencyVersion::Found(v.to_string())
    }

    fn upgrades(current: &DependencyVersion, target: &str) -> bool {
        matches!(judge(current, target), UpgradeDecision::Upgrade { .. })
    }

    #[test]
    fn test_different_version_upgrades() {
        assert_eq!(
            judge(&found("v1.2.0"), "v1.3.0"),
            UpgradeDecision::Upgrade {
                from: "v1.2.0".to_string()
            }
        );
    }

    #[test]
    fn test_same_version_is_noop() {
        assert_eq!(judge(&found("v1.3.0"), "v1.3.0"), UpgradeDecision::NoUpgrade);
        assert_eq!(judge(&found("garbage"), "garbage"), UpgradeDecision::NoUpgrade);
    }

    #[test]
    fn test_downgrade_is_treated_as_upgrade() {
        assert!(upgrades(&found("v2.0.0"), "v1.0.0"));
    }

    #[test]
    fn test_unknown_and_not_found_never_upgrade() {
        assert!(!upgrades(&DependencyVersion::Unknown, "v1.3.0"));
        assert!(!upgrades(&DependencyVersion::NotFound, "v1.3.0"));
        // Even when the target literally equals a classification label.
        assert!(!upgrades(&DependencyVersion::Unknown, "v0.0.0"));
        assert!(!upgrades(&DependencyVersion::NotFound, "Unknown"));
    }

    #[test]
    fn test_comparison_is_exact_string_equality() {
        assert!(upgrades(&found("v1.3.0"), "1.3.0"));
        assert!(upgrades(&found("v1.3.0"), "v1.3.0 "));
        assert!(upgrades(&found("V1.3.0"), "v1.3.0"));
    }
}
