//! Application error types using thiserror
//!
//! Error hierarchy:
//! - UpdaterError: fatal errors that stop the whole run
//! - CommandError: an external tool could not be launched or exited non-zero
//!
//! Per-project failures are not errors at this level; the pipeline turns them
//! into `UpgradeOutcome` values so the scan can move on.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Fatal error for a whole run
#[derive(Error, Debug)]
pub enum UpdaterError {
    /// Directory traversal failed somewhere under the root
    #[error("failed to walk {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Reading the answer to a confirmation prompt failed
    #[error("failed to read confirmation: {0}")]
    Prompt(#[source] std::io::Error),
}

/// Error from invoking an external tool
#[derive(Error, Debug)]
pub enum CommandError {
    /// The program could not be started at all
    #[error("failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully
    #[error("'{command}' failed ({status}): {output}")]
    Failed {
        command: String,
        status: ExitStatus,
        output: String,
    },

    /// A file the tool left behind could not be removed
    #[error("failed to remove {}: {source}", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UpdaterError {
    /// Creates a new Scan error
    pub fn scan(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        UpdaterError::Scan {
            path: path.into(),
            source,
        }
    }
}

impl CommandError {
    /// Creates a new Spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        CommandError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Creates a new Failed error
    pub fn failed(
        command: impl Into<String>,
        status: ExitStatus,
        output: impl Into<String>,
    ) -> Self {
        CommandError::Failed {
            command: command.into(),
            status,
            output: output.into(),
        }
    }

    /// Creates a new Cleanup error
    pub fn cleanup(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CommandError::Cleanup {
            path: path.into(),
            source,
        }
    }

    /// Combined output captured from the tool, empty when it never ran
    pub fn output(&self) -> &str {
        match self {
            CommandError::Spawn { .. } | CommandError::Cleanup { .. } => "",
            CommandError::Failed { output, .. } => output,
        }
    }
}
