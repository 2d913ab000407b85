//! Per-project upgrade outcome types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Nothing was changed; the project was left alone on purpose
    Skipped,
    /// A step before the update failed, or committing/pushing failed
    Failed,
    /// The update was applied but left the tree broken; needs manual cleanup
    Aborted,
    /// Dry-run: the project would have been upgraded
    Planned,
    /// Upgrade committed and pushed
    Upgraded,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutcomeKind::Skipped => "skipped",
            OutcomeKind::Failed => "failed",
            OutcomeKind::Aborted => "aborted",
            OutcomeKind::Planned => "planned",
            OutcomeKind::Upgraded => "upgraded",
        };
        f.write_str(label)
    }
}

/// Terminal state of the upgrade pipeline for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum UpgradeOutcome {
    /// Version unknown, not found, or already at the target
    #[serde(rename = "skipped-no-upgrade-needed")]
    NoUpgradeNeeded,
    /// Answered "no" at the confirmation prompt
    #[serde(rename = "skipped-by-user")]
    DeclinedByUser,
    /// Working tree had changes (or its status could not be queried)
    #[serde(rename = "skipped-uncommitted-changes")]
    UncommittedChanges,
    /// Could not determine or switch to the main branch
    #[serde(rename = "skipped-branch-error")]
    BranchError { message: String },
    /// Pulling from the remote failed
    #[serde(rename = "failed-pull")]
    PullFailed { message: String },
    /// Setting the dependency version or tidying failed
    #[serde(rename = "failed-dependency-update")]
    DependencyUpdateFailed { message: String },
    /// Static analysis failed after the update
    #[serde(rename = "aborted-after-vet-failure")]
    VetFailed { message: String },
    /// Tests failed after the update
    #[serde(rename = "aborted-after-test-failure")]
    TestFailed { message: String },
    /// Building the executable failed after the update
    #[serde(rename = "aborted-after-build-failure")]
    BuildFailed { message: String },
    /// Staging or committing failed
    #[serde(rename = "failed-commit")]
    CommitFailed { message: String },
    /// Pushing to the remote failed
    #[serde(rename = "failed-push")]
    PushFailed { message: String },
    /// Dry-run stopped after the decision
    #[serde(rename = "would-upgrade")]
    WouldUpgrade,
    /// All steps completed
    #[serde(rename = "succeeded")]
    Succeeded,
}

impl UpgradeOutcome {
    /// Returns the coarse classification
    pub fn kind(&self) -> OutcomeKind {
        match self {
            UpgradeOutcome::NoUpgradeNeeded
            | UpgradeOutcome::DeclinedByUser
            | UpgradeOutcome::UncommittedChanges => OutcomeKind::Skipped,
            UpgradeOutcome::BranchError { .. }
            | UpgradeOutcome::PullFailed { .. }
            | UpgradeOutcome::DependencyUpdateFailed { .. }
            | UpgradeOutcome::CommitFailed { .. }
            | UpgradeOutcome::PushFailed { .. } => OutcomeKind::Failed,
            UpgradeOutcome::VetFailed { .. }
            | UpgradeOutcome::TestFailed { .. }
            | UpgradeOutcome::BuildFailed { .. } => OutcomeKind::Aborted,
            UpgradeOutcome::WouldUpgrade => OutcomeKind::Planned,
            UpgradeOutcome::Succeeded => OutcomeKind::Upgraded,
        }
    }

    /// Stable kebab-case label, identical to the serialized tag
    pub fn label(&self) -> &'static str {
        match self {
            UpgradeOutcome::NoUpgradeNeeded => "skipped-no-upgrade-needed",
            UpgradeOutcome::DeclinedByUser => "skipped-by-user",
            UpgradeOutcome::UncommittedChanges => "skipped-uncommitted-changes",
            UpgradeOutcome::BranchError { .. } => "skipped-branch-error",
            UpgradeOutcome::PullFailed { .. } => "failed-pull",
            UpgradeOutcome::DependencyUpdateFailed { .. } => "failed-dependency-update",
            UpgradeOutcome::VetFailed { .. } => "aborted-after-vet-failure",
            UpgradeOutcome::TestFailed { .. } => "aborted-after-test-failure",
            UpgradeOutcome::BuildFailed { .. } => "aborted-after-build-failure",
            UpgradeOutcome::CommitFailed { .. } => "failed-commit",
            UpgradeOutcome::PushFailed { .. } => "failed-push",
            UpgradeOutcome::WouldUpgrade => "would-upgrade",
            UpgradeOutcome::Succeeded => "succeeded",
        }
    }

    /// Error message captured from the failing step
    pub fn message(&self) -> Option<&str> {
        match self {
            UpgradeOutcome::BranchError { message }
            | UpgradeOutcome::PullFailed { message }
            | UpgradeOutcome::DependencyUpdateFailed { message }
            | UpgradeOutcome::VetFailed { message }
            | UpgradeOutcome::TestFailed { message }
            | UpgradeOutcome::BuildFailed { message }
            | UpgradeOutcome::CommitFailed { message }
            | UpgradeOutcome::PushFailed { message } => Some(message),
            _ => None,
        }
    }

    /// Returns true if the project was left with an applied but unverified update
    pub fn needs_manual_cleanup(&self) -> bool {
        self.kind() == OutcomeKind::Aborted
    }
}

impl fmt::Display for UpgradeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}: {}", self.label(), message),
            None => f.write_str(self.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg() -> String {
        "boom".to_string()
    }

    #[test]
    fn test_kinds() {
        assert_eq!(UpgradeOutcome::NoUpgradeNeeded.kind(), OutcomeKind::Skipped);
        assert_eq!(UpgradeOutcome::DeclinedByUser.kind(), OutcomeKind::Skipped);
        assert_eq!(UpgradeOutcome::UncommittedChanges.kind(), OutcomeKind::Skipped);
        assert_eq!(
            UpgradeOutcome::BranchError { message: msg() }.kind(),
            OutcomeKind::Failed
        );
        assert_eq!(
            UpgradeOutcome::PushFailed { message: msg() }.kind(),
            OutcomeKind::Failed
        );
        assert_eq!(
            UpgradeOutcome::VetFailed { message: msg() }.kind(),
            OutcomeKind::Aborted
        );
        assert_eq!(
            UpgradeOutcome::TestFailed { message: msg() }.kind(),
            OutcomeKind::Aborted
        );
        assert_eq!(
            UpgradeOutcome::BuildFailed { message: msg() }.kind(),
            OutcomeKind::Aborted
        );
        assert_eq!(UpgradeOutcome::WouldUpgrade.kind(), OutcomeKind::Planned);
        assert_eq!(UpgradeOutcome::Succeeded.kind(), OutcomeKind::Upgraded);
    }

    #[test]
    fn test_needs_manual_cleanup_only_for_aborted() {
        assert!(UpgradeOutcome::TestFailed { message: msg() }.needs_manual_cleanup());
        assert!(!UpgradeOutcome::PullFailed { message: msg() }.needs_manual_cleanup());
        assert!(!UpgradeOutcome::Succeeded.needs_manual_cleanup());
    }

    #[test]
    fn test_display_includes_message() {
        let outcome = UpgradeOutcome::PullFailed {
            message: "'git pull' failed (exit status: 1): conflict".to_string(),
        };
        let text = format!("{}", outcome);
        assert!(text.starts_with("failed-pull: "));
        assert!(text.contains("conflict"));
        assert_eq!(format!("{}", UpgradeOutcome::Succeeded), "succeeded");
    }

    #[test]
    fn test_serialized_tag_matches_label() {
        let outcomes = [
            UpgradeOutcome::NoUpgradeNeeded,
            UpgradeOutcome::UncommittedChanges,
            UpgradeOutcome::DependencyUpdateFailed { message: msg() },
            UpgradeOutcome::BuildFailed { message: msg() },
            UpgradeOutcome::Succeeded,
        ];
        for outcome in outcomes {
            let value = serde_json::to_value(&outcome).unwrap();
            assert_eq!(value["outcome"], outcome.label());
        }
    }

    #[test]
    fn test_serialized_message() {
        let value = serde_json::to_value(UpgradeOutcome::CommitFailed { message: msg() }).unwrap();
        assert_eq!(value["message"], "boom");
    }
}
