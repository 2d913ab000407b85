//! Upgrade pipeline for a single project
//!
//! Steps run in strict order, each gated on the previous one:
//! decide → confirm → clean tree → main branch → pull → go get/tidy →
//! vet → test → build (executables only) → commit → push.
//!
//! The first failing step ends the pipeline for that project. Nothing is rolled
//! back. Failures of vet, test or build happen after the dependency was already
//! bumped and are reported as aborted, since the tree is left modified.

use crate::config::UpdaterConfig;
use crate::domain::{DependencyVersion, Project, ProjectReport, UpgradeOutcome};
use crate::error::CommandError;
use crate::interaction::DecisionSource;
use crate::manifest::read_dependency_version;
use crate::reporter::Reporter;
use crate::runner::CommandRunner;
use crate::tools::{Git, GoToolchain};
use crate::update::{judge, UpgradeDecision};

const ABORTED: &str = "Aborted due to unwanted project state after update; manual cleanup required";

/// Runs the upgrade steps for one project at a time
pub struct UpgradePipeline<'a> {
    config: &'a UpdaterConfig,
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
}

impl<'a> UpgradePipeline<'a> {
    pub fn new(
        config: &'a UpdaterConfig,
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            config,
            runner,
            reporter,
        }
    }

    /// Inspect the project's manifest and upgrade it if needed
    pub fn run(&self, project: &Project, decisions: &mut dyn DecisionSource) -> ProjectReport {
        let current = read_dependency_version(
            &project.manifest,
            &self.config.dependency,
            self.config.match_mode,
        );
        let outcome = self.execute(project, &current, decisions);
        ProjectReport::new(project, current, outcome)
    }

    /// Drive the steps for a project whose current version is already known
    pub fn execute(
        &self,
        project: &Project,
        current: &DependencyVersion,
        decisions: &mut dyn DecisionSource,
    ) -> UpgradeOutcome {
        let name = project.name.as_str();
        let config = self.config;
        let target = config.target_version.as_str();

        let from = match judge(current, target) {
            UpgradeDecision::Upgrade { from } => from,
            UpgradeDecision::NoUpgrade => {
                self.reporter.debug(
                    name,
                    &format!(
                        "Upgrade not needed for {} (current: {})",
                        project.dir.display(),
                        current
                    ),
                );
                return UpgradeOutcome::NoUpgradeNeeded;
            }
        };

        if config.dry_run {
            self.reporter
                .info(name, &format!("Would update from version {} to {}", from, target));
            return UpgradeOutcome::WouldUpgrade;
        }

        if config.confirm_each {
            match decisions.confirm(project) {
                Ok(true) => {}
                Ok(false) => {
                    self.reporter
                        .debug(name, &format!("Skipping {}", project.dir.display()));
                    return UpgradeOutcome::DeclinedByUser;
                }
                Err(e) => {
                    self.reporter.error(name, &format!("{}. Skipping.", e));
                    return UpgradeOutcome::DeclinedByUser;
                }
            }
        }

        self.reporter.info(
            name,
            &format!("Updating project from version {} to {}", from, target),
        );

        let git = Git::new(self.runner, &project.dir);
        let go = GoToolchain::new(self.runner, &project.dir);

        self.reporter.info(name, "Checking for uncommitted changes...");
        match git.has_uncommitted_changes() {
            Ok(false) => {}
            Ok(true) => {
                self.reporter.warn(
                    name,
                    &format!("Project {} has uncommitted changes. Skipping update.", name),
                );
                return UpgradeOutcome::UncommittedChanges;
            }
            Err(e) => {
                self.reporter.warn(
                    name,
                    &format!("Could not check working tree of {} ({}). Skipping update.", name, e),
                );
                return UpgradeOutcome::UncommittedChanges;
            }
        }

        let main_branch = config.main_branch.as_str();
        self.reporter.info(
            name,
            &format!("Checking that current git branch is {}...", main_branch),
        );
        let branch = match git.current_branch() {
            Ok(branch) => branch,
            Err(e) => {
                let message = self.failure(name, "determining current branch", &e);
                return UpgradeOutcome::BranchError { message };
            }
        };
        if branch != main_branch {
            self.reporter.info(
                name,
                &format!("Project is on '{}', not '{}'. Switching...", branch, main_branch),
            );
            if let Err(e) = git.checkout(main_branch) {
                let message =
                    self.failure(name, &format!("switching to '{}' branch", main_branch), &e);
                return UpgradeOutcome::BranchError { message };
            }
        }

        self.reporter.info(name, "Pulling latest from origin...");
        if let Err(e) = git.pull() {
            let message = self.failure(name, "pulling changes", &e);
            return UpgradeOutcome::PullFailed { message };
        }

        self.reporter.info(name, "Running go get...");
        if let Err(e) = go.update_dependency(&config.dependency, target) {
            let message = self.failure(name, "updating dependency", &e);
            return UpgradeOutcome::DependencyUpdateFailed { message };
        }
        self.reporter.info(
            name,
            &format!("Successfully updated dependency {} to {}", config.dependency, target),
        );

        self.reporter.info(name, "Running go vet...");
        if let Err(e) = go.vet() {
            let message = self.abort(name, "running go vet", &e);
            return UpgradeOutcome::VetFailed { message };
        }

        self.reporter.info(name, "Running go test...");
        if let Err(e) = go.test() {
            let message = self.abort(name, "running go test", &e);
            return UpgradeOutcome::TestFailed { message };
        }

        let layout = &config.layout;
        if project.has_file(layout.entry_point) {
            self.reporter.info(name, "Running go build...");
            if let Err(e) = go.build(layout.entry_point, layout.build_artifact) {
                let message = self.abort(name, "running go build", &e);
                return UpgradeOutcome::BuildFailed { message };
            }
        }

        self.reporter.info(name, "Committing changes to git...");
        let committed = git
            .add(&[layout.manifest_file, layout.lock_file])
            .and_then(|()| git.commit(&config.commit_message()));
        if let Err(e) = committed {
            let message = self.failure(name, "committing changes", &e);
            return UpgradeOutcome::CommitFailed { message };
        }

        self.reporter.info(name, "Pushing to git origin...");
        if let Err(e) = git.push() {
            let message = self.failure(name, "pushing changes", &e);
            return UpgradeOutcome::PushFailed { message };
        }

        self.reporter.info(name, &format!("Done updating {}", name));
        UpgradeOutcome::Succeeded
    }

    fn failure(&self, name: &str, action: &str, error: &CommandError) -> String {
        let message = error.to_string();
        self.reporter
            .error(name, &format!("Error {} for project {}: {}", action, name, message));
        message
    }

    fn abort(&self, name: &str, action: &str, error: &CommandError) -> String {
        let message = self.failure(name, action, error);
        self.reporter.error(name, ABORTED);
        message
    }
}
