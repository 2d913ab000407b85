//! CLI argument parsing module for gomod-bump

use crate::config::CONFIRM_EACH;
use clap::Parser;
use std::path::PathBuf;

/// Bump a Go module dependency across every project under a directory
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gomod-bump",
    version,
    about = "Bump a Go module dependency across every project under a directory"
)]
pub struct CliArgs {
    /// Root directory to scan for go.mod files
    #[arg(value_name = "ROOT_DIRECTORY_PATH")]
    pub root: PathBuf,

    /// Module path of the dependency (e.g. github.com/foo/bar)
    #[arg(value_name = "DEPENDENCY")]
    pub dependency: String,

    /// Version to pin (e.g. v1.3.0)
    #[arg(value_name = "TARGET_VERSION")]
    pub target_version: String,

    /// Pass `confirm-each` to be asked before each project is touched
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,

    /// Branch each project must be on before upgrading
    #[arg(long, default_value = crate::config::DEFAULT_MAIN_BRANCH)]
    pub main_branch: String,

    /// Match the dependency against whole module paths instead of substrings
    #[arg(long)]
    pub exact_match: bool,

    /// Dry run mode - report which projects would be upgraded without touching them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - warnings and errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the run summary in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Check if per-project confirmation was requested
    pub fn confirm_each(&self) -> bool {
        self.mode.as_deref() == Some(CONFIRM_EACH)
    }

    /// Log filter matching the verbosity flags
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
