//! Text output formatter for human-readable display
//!
//! Lists the projects the run acted on with their outcome, then totals, then
//! any project left with an applied but unverified update.

use crate::domain::{OutcomeKind, ProjectReport, RunSummary};
use crate::output::{OutputFormatter, Verbosity};
use colored::{ColoredString, Colorize};
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn paint(&self, text: &str, kind: OutcomeKind) -> String {
        if !self.color {
            return text.to_string();
        }
        let painted: ColoredString = match kind {
            OutcomeKind::Upgraded => text.green().bold(),
            OutcomeKind::Planned => text.cyan(),
            OutcomeKind::Skipped => text.dimmed(),
            OutcomeKind::Failed => text.red(),
            OutcomeKind::Aborted => text.red().bold(),
        };
        painted.to_string()
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_project_line(
        &self,
        report: &ProjectReport,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let label = self.paint(report.outcome.label(), report.kind());
        let detail = report
            .outcome
            .message()
            .and_then(|m| m.lines().next())
            .map(|m| format!(" ({})", m))
            .unwrap_or_default();

        writeln!(
            writer,
            "  {:width$} {:>10} {}{}",
            report.name,
            report.current_version.label(),
            label,
            detail,
            width = max_name_len
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = if summary.dry_run { "(dry-run) " } else { "" };
        writeln!(
            writer,
            "{}{} -> {}",
            prefix,
            self.bold(&summary.dependency),
            self.bold(&summary.target_version)
        )?;

        if self.verbosity != Verbosity::Quiet {
            let shown: Vec<&ProjectReport> = match self.verbosity {
                Verbosity::Verbose => summary.projects.iter().collect(),
                _ => summary.attempted().collect(),
            };
            let max_name_len = shown
                .iter()
                .map(|r| r.name.len())
                .max()
                .unwrap_or(0)
                .max(12);
            for report in shown {
                self.format_project_line(report, max_name_len, writer)?;
            }
        }

        let upgraded_label = if summary.dry_run { "to upgrade" } else { "upgraded" };
        let upgraded = if summary.dry_run {
            summary.count(OutcomeKind::Planned)
        } else {
            summary.count(OutcomeKind::Upgraded)
        };
        writeln!(
            writer,
            "{} projects scanned: {} {}, {} skipped, {} failed, {} aborted",
            summary.projects_scanned(),
            upgraded,
            upgraded_label,
            summary.count(OutcomeKind::Skipped),
            summary.count(OutcomeKind::Failed),
            summary.count(OutcomeKind::Aborted)
        )?;

        if summary.has_aborted() {
            writeln!(
                writer,
                "{}",
                self.paint("Needs manual cleanup:", OutcomeKind::Aborted)
            )?;
            for report in summary.by_kind(OutcomeKind::Aborted) {
                writeln!(writer, "  {}", report.path.display())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyVersion, Project, UpgradeOutcome};

    fn report(name: &str, version: &str, outcome: UpgradeOutcome) -> ProjectReport {
        let project = Project::from_manifest(format!("/work/{}/go.mod", name));
        ProjectReport::new(&project, DependencyVersion::Found(version.into()), outcome)
    }

    fn sample() -> RunSummary {
        let mut summary = RunSummary::new("github.com/foo/bar", "v1.3.0", false);
        summary.add(report("billing", "v1.2.0", UpgradeOutcome::Succeeded));
        summary.add(report("auth", "v1.3.0", UpgradeOutcome::NoUpgradeNeeded));
        summary.add(report(
            "gateway",
            "v1.1.0",
            UpgradeOutcome::TestFailed {
                message: "'go test ./...' failed\n--- FAIL".into(),
            },
        ));
        summary
    }

    fn render(formatter: TextFormatter, summary: &RunSummary) -> String {
        let mut out = Vec::new();
        formatter.format(summary, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_normal_lists_attempted_projects() {
        let text = render(TextFormatter::with_color(Verbosity::Normal, false), &sample());
        assert!(text.starts_with("github.com/foo/bar -> v1.3.0\n"));
        assert!(text.contains("billing"));
        assert!(text.contains("succeeded"));
        assert!(!text.contains("auth"));
        assert!(text.contains("aborted-after-test-failure ('go test ./...' failed)"));
        assert!(!text.contains("--- FAIL"));
    }

    #[test]
    fn test_verbose_lists_every_project() {
        let text = render(TextFormatter::with_color(Verbosity::Verbose, false), &sample());
        assert!(text.contains("auth"));
        assert!(text.contains("skipped-no-upgrade-needed"));
    }

    #[test]
    fn test_quiet_prints_totals_only() {
        let text = render(TextFormatter::with_color(Verbosity::Quiet, false), &sample());
        assert!(!text.contains("  billing"));
        assert!(text.contains("3 projects scanned: 1 upgraded, 1 skipped, 0 failed, 1 aborted"));
    }

    #[test]
    fn test_aborted_projects_listed_for_cleanup() {
        let text = render(TextFormatter::with_color(Verbosity::Normal, false), &sample());
        assert!(text.contains("Needs manual cleanup:\n  /work/gateway\n"));
    }

    #[test]
    fn test_dry_run_wording() {
        let mut summary = RunSummary::new("github.com/foo/bar", "v1.3.0", true);
        summary.add(report("billing", "v1.2.0", UpgradeOutcome::WouldUpgrade));
        let text = render(TextFormatter::with_color(Verbosity::Normal, false), &summary);
        assert!(text.starts_with("(dry-run) "));
        assert!(text.contains("would-upgrade"));
        assert!(text.contains("1 projects scanned: 1 to upgrade"));
        assert!(!text.contains("manual cleanup"));
    }
}
