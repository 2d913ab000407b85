//! JSON output formatter for machine processing

use crate::domain::{OutcomeKind, ProjectReport, RunSummary};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects which projects are listed
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    dependency: &'a str,
    target_version: &'a str,
    dry_run: bool,
    summary: JsonTotals,
    projects: Vec<&'a ProjectReport>,
}

/// Counts per outcome classification
#[derive(Serialize)]
struct JsonTotals {
    scanned: usize,
    upgraded: usize,
    planned: usize,
    skipped: usize,
    failed: usize,
    aborted: usize,
}

impl JsonTotals {
    fn from_summary(summary: &RunSummary) -> Self {
        Self {
            scanned: summary.projects_scanned(),
            upgraded: summary.count(OutcomeKind::Upgraded),
            planned: summary.count(OutcomeKind::Planned),
            skipped: summary.count(OutcomeKind::Skipped),
            failed: summary.count(OutcomeKind::Failed),
            aborted: summary.count(OutcomeKind::Aborted),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let projects = match self.verbosity {
            Verbosity::Verbose => summary.projects.iter().collect(),
            _ => summary.attempted().collect(),
        };

        let output = JsonOutput {
            dependency: &summary.dependency,
            target_version: &summary.target_version,
            dry_run: summary.dry_run,
            summary: JsonTotals::from_summary(summary),
            projects,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyVersion, Project, UpgradeOutcome};

    fn sample() -> RunSummary {
        let mut summary = RunSummary::new("github.com/foo/bar", "v1.3.0", false);
        let billing = Project::from_manifest("/work/billing/go.mod");
        let auth = Project::from_manifest("/work/auth/go.mod");
        summary.add(ProjectReport::new(
            &billing,
            DependencyVersion::Found("v1.2.0".into()),
            UpgradeOutcome::PushFailed {
                message: "rejected".into(),
            },
        ));
        summary.add(ProjectReport::new(
            &auth,
            DependencyVersion::NotFound,
            UpgradeOutcome::NoUpgradeNeeded,
        ));
        summary
    }

    fn render(verbosity: Verbosity) -> serde_json::Value {
        let mut out = Vec::new();
        JsonFormatter::new(verbosity).format(&sample(), &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_json_schema() {
        let value = render(Verbosity::Normal);
        assert_eq!(value["dependency"], "github.com/foo/bar");
        assert_eq!(value["target_version"], "v1.3.0");
        assert_eq!(value["dry_run"], false);
        assert_eq!(value["summary"]["scanned"], 2);
        assert_eq!(value["summary"]["failed"], 1);
        assert_eq!(value["summary"]["skipped"], 1);

        let projects = value["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0]["name"], "billing");
        assert_eq!(projects[0]["outcome"], "failed-push");
        assert_eq!(projects[0]["message"], "rejected");
    }

    #[test]
    fn test_verbose_includes_untouched_projects() {
        let value = render(Verbosity::Verbose);
        let projects = value["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1]["outcome"], "skipped-no-upgrade-needed");
        assert_eq!(projects[1]["current_version"]["state"], "not_found");
    }
}
