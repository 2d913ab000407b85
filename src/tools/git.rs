//! Git operations for a single project

use crate::error::CommandError;
use crate::runner::{CommandOutput, CommandRunner};
use std::path::{Path, PathBuf};

/// Git commands scoped to one project directory
pub struct Git<'a> {
    runner: &'a dyn CommandRunner,
    project_path: PathBuf,
}

impl<'a> Git<'a> {
    pub fn new(runner: &'a dyn CommandRunner, project_path: impl AsRef<Path>) -> Self {
        Self {
            runner,
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Check if the working tree has anything to commit or any untracked file
    ///
    /// A failing status query is an error; callers decide how to treat it.
    pub fn has_uncommitted_changes(&self) -> Result<bool, CommandError> {
        let output = self.run_git(&["status", "--porcelain"])?;
        Ok(!output.is_empty())
    }

    /// Name of the checked out branch
    pub fn current_branch(&self) -> Result<String, CommandError> {
        let output = self.run_git(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.trimmed().to_string())
    }

    pub fn checkout(&self, branch: &str) -> Result<(), CommandError> {
        self.run_git(&["checkout", branch]).map(drop)
    }

    /// Fetch and merge from the tracking branch
    pub fn pull(&self) -> Result<(), CommandError> {
        self.run_git(&["pull"]).map(drop)
    }

    /// Stage exactly the given paths
    pub fn add(&self, paths: &[&str]) -> Result<(), CommandError> {
        let mut args = vec!["add"];
        args.extend_from_slice(paths);
        self.run_git(&args).map(drop)
    }

    pub fn commit(&self, message: &str) -> Result<(), CommandError> {
        self.run_git(&["commit", "-m", message]).map(drop)
    }

    pub fn push(&self) -> Result<(), CommandError> {
        self.run_git(&["push"]).map(drop)
    }

    fn run_git(&self, args: &[&str]) -> Result<CommandOutput, CommandError> {
        self.runner.run("git", args, &self.project_path)
    }
}
