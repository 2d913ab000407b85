//! Run orchestrator: scan the tree and push every project through the pipeline
//!
//! This module provides:
//! - Workflow coordination: scan → inspect → decide → upgrade, one project at a time
//! - Collection of per-project reports into a run summary
//! - Fatal stop on traversal errors, keeping the reports gathered so far

use crate::config::UpdaterConfig;
use crate::domain::{Project, RunSummary};
use crate::error::UpdaterError;
use crate::interaction::DecisionSource;
use crate::manifest::ManifestScanner;
use crate::pipeline::UpgradePipeline;
use crate::reporter::Reporter;
use crate::runner::CommandRunner;

/// Orchestrator for a whole run
pub struct Orchestrator<'a> {
    /// Run configuration
    config: UpdaterConfig,
    /// Executes git and go
    runner: &'a dyn CommandRunner,
    /// Receives per-project progress messages
    reporter: &'a dyn Reporter,
}

/// Result of running the orchestrator
#[derive(Debug)]
pub struct OrchestratorResult {
    /// Reports for every project processed before the run ended
    pub summary: RunSummary,
    /// Error that stopped the scan, if any
    pub fatal: Option<UpdaterError>,
}

impl OrchestratorResult {
    /// Returns true if the scan completed
    pub fn is_complete(&self) -> bool {
        self.fatal.is_none()
    }
}

impl<'a> Orchestrator<'a> {
    /// Create a new orchestrator
    pub fn new(
        config: UpdaterConfig,
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            config,
            runner,
            reporter,
        }
    }

    /// Run the scan and upgrade workflow
    ///
    /// Projects are processed strictly one after another in scan order.
    pub fn run(&self, decisions: &mut dyn DecisionSource) -> OrchestratorResult {
        let config = &self.config;
        let pipeline = UpgradePipeline::new(config, self.runner, self.reporter);
        let mut summary =
            RunSummary::new(&config.dependency, &config.target_version, config.dry_run);

        log::debug!(
            "Scanning {} for {} files",
            config.root.display(),
            config.layout.manifest_file
        );

        for manifest in ManifestScanner::new(&config.root, config.layout.manifest_file) {
            let manifest = match manifest {
                Ok(path) => path,
                Err(err) => {
                    return OrchestratorResult {
                        summary,
                        fatal: Some(err),
                    }
                }
            };

            let project = Project::from_manifest(manifest);
            summary.add(pipeline.run(&project, decisions));
        }

        OrchestratorResult {
            summary,
            fatal: None,
        }
    }
}
