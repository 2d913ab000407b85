//! Go toolchain operations for a single project

use crate::error::CommandError;
use crate::runner::{CommandOutput, CommandRunner};
use std::path::{Path, PathBuf};

/// `go` commands scoped to one project directory
pub struct GoToolchain<'a> {
    runner: &'a dyn CommandRunner,
    project_path: PathBuf,
}

impl<'a> GoToolchain<'a> {
    pub fn new(runner: &'a dyn CommandRunner, project_path: impl AsRef<Path>) -> Self {
        Self {
            runner,
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Pin `dependency` at `version`, then tidy the module
    pub fn update_dependency(&self, dependency: &str, version: &str) -> Result<(), CommandError> {
        let spec = format!("{}@{}", dependency, version);
        self.run_go(&["get", &spec])?;
        self.run_go(&["mod", "tidy"])?;
        Ok(())
    }

    pub fn vet(&self) -> Result<(), CommandError> {
        self.run_go(&["vet", "./..."]).map(drop)
    }

    pub fn test(&self) -> Result<(), CommandError> {
        self.run_go(&["test", "./..."]).map(drop)
    }

    /// Build `entry_point` into `artifact` and delete the artifact again
    ///
    /// An artifact that is already gone after a successful build is fine.
    pub fn build(&self, entry_point: &str, artifact: &str) -> Result<(), CommandError> {
        self.run_go(&["build", "-o", artifact, entry_point])?;

        let artifact_path = self.project_path.join(artifact);
        match std::fs::remove_file(&artifact_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CommandError::cleanup(artifact_path, e)),
        }
    }

    fn run_go(&self, args: &[&str]) -> Result<CommandOutput, CommandError> {
        self.runner.run("go", args, &self.project_path)
    }
}
