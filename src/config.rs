//! Run configuration derived from the command line

use crate::cli::CliArgs;
use crate::manifest::MatchMode;
use std::path::PathBuf;

/// Default branch a project must be on before it is upgraded
pub const DEFAULT_MAIN_BRANCH: &str = "master";

/// Fourth positional argument that turns on per-project confirmation
pub const CONFIRM_EACH: &str = "confirm-each";

/// File names that make up a Go project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Module manifest recognised by exact file name
    pub manifest_file: &'static str,
    /// Checksum file committed together with the manifest
    pub lock_file: &'static str,
    /// Presence marks the project as an executable
    pub entry_point: &'static str,
    /// Throwaway output of the verification build
    pub build_artifact: &'static str,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            manifest_file: "go.mod",
            lock_file: "go.sum",
            entry_point: "main.go",
            build_artifact: "tmp-app",
        }
    }
}

/// Everything the orchestrator and pipeline need to know about a run
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    /// Directory tree to scan
    pub root: PathBuf,
    /// Module path of the dependency to bump
    pub dependency: String,
    /// Version to pin
    pub target_version: String,
    /// Ask before touching each project
    pub confirm_each: bool,
    /// Branch the upgrade is committed on
    pub main_branch: String,
    /// How manifest lines are matched against the dependency
    pub match_mode: MatchMode,
    /// Decide only, never mutate
    pub dry_run: bool,
    /// File names used inside each project
    pub layout: ProjectLayout,
}

impl UpdaterConfig {
    /// Creates a configuration with default settings
    pub fn new(
        root: impl Into<PathBuf>,
        dependency: impl Into<String>,
        target_version: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            dependency: dependency.into(),
            target_version: target_version.into(),
            confirm_each: false,
            main_branch: DEFAULT_MAIN_BRANCH.to_string(),
            match_mode: MatchMode::default(),
            dry_run: false,
            layout: ProjectLayout::default(),
        }
    }

    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        let match_mode = if args.exact_match {
            MatchMode::ExactModule
        } else {
            MatchMode::Substring
        };

        Self {
            root: args.root.clone(),
            dependency: args.dependency.clone(),
            target_version: args.target_version.clone(),
            confirm_each: args.confirm_each(),
            main_branch: args.main_branch.clone(),
            match_mode,
            dry_run: args.dry_run,
            layout: ProjectLayout::default(),
        }
    }

    /// Enable or disable per-project confirmation
    pub fn with_confirm_each(mut self, confirm_each: bool) -> Self {
        self.confirm_each = confirm_each;
        self
    }

    /// Set the main branch name
    pub fn with_main_branch(mut self, branch: impl Into<String>) -> Self {
        self.main_branch = branch.into();
        self
    }

    /// Set the manifest match mode
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Enable or disable dry-run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Commit message recorded for the upgrade
    pub fn commit_message(&self) -> String {
        format!(
            "Updated {} to version {}",
            self.dependency, self.target_version
        )
    }
}
