//! Run summary types
//!
//! Provides structures for tracking outcomes at project and overall levels.

use super::{DependencyVersion, OutcomeKind, Project, UpgradeOutcome};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome for a single project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReport {
    /// Display name of the project
    pub name: String,
    /// Project directory
    pub path: PathBuf,
    /// Version found in the manifest before any change
    pub current_version: DependencyVersion,
    /// Where the pipeline stopped
    #[serde(flatten)]
    pub outcome: UpgradeOutcome,
}

impl ProjectReport {
    /// Creates a new ProjectReport
    pub fn new(
        project: &Project,
        current_version: DependencyVersion,
        outcome: UpgradeOutcome,
    ) -> Self {
        Self {
            name: project.name.clone(),
            path: project.dir.clone(),
            current_version,
            outcome,
        }
    }

    /// Returns the outcome classification
    pub fn kind(&self) -> OutcomeKind {
        self.outcome.kind()
    }
}

/// Overall summary of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Dependency being bumped
    pub dependency: String,
    /// Requested version
    pub target_version: String,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// One report per discovered manifest, in scan order
    pub projects: Vec<ProjectReport>,
}

impl RunSummary {
    /// Creates a new RunSummary
    pub fn new(
        dependency: impl Into<String>,
        target_version: impl Into<String>,
        dry_run: bool,
    ) -> Self {
        Self {
            dependency: dependency.into(),
            target_version: target_version.into(),
            dry_run,
            projects: Vec::new(),
        }
    }

    /// Adds a project report
    pub fn add(&mut self, report: ProjectReport) {
        self.projects.push(report);
    }

    /// Returns the number of projects discovered
    pub fn projects_scanned(&self) -> usize {
        self.projects.len()
    }

    /// Returns the number of projects with the given classification
    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.projects.iter().filter(|p| p.kind() == kind).count()
    }

    /// Returns the reports with the given classification
    pub fn by_kind(&self, kind: OutcomeKind) -> impl Iterator<Item = &ProjectReport> {
        self.projects.iter().filter(move |p| p.kind() == kind)
    }

    /// Returns projects whose pipeline went past the decision step
    pub fn attempted(&self) -> impl Iterator<Item = &ProjectReport> {
        self.projects
            .iter()
            .filter(|p| p.outcome != UpgradeOutcome::NoUpgradeNeeded)
    }

    /// Returns true if any project was left in a state needing manual cleanup
    pub fn has_aborted(&self) -> bool {
        self.count(OutcomeKind::Aborted) > 0
    }
}
