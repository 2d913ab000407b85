//! External command execution
//!
//! Every tool invocation goes through the `CommandRunner` trait with an
//! explicit working directory, so nothing depends on the process-wide current
//! directory and tests can substitute a scripted runner.

use crate::error::CommandError;
use std::path::Path;
use std::process::Command;

/// Output captured from a successful command
///
/// The two streams are captured separately and concatenated, so lines are not
/// interleaved in the order the tool wrote them: all of stdout comes first,
/// then all of stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output followed by standard error
    pub combined: String,
}

impl CommandOutput {
    /// Create output from captured text
    pub fn new(combined: impl Into<String>) -> Self {
        Self {
            combined: combined.into(),
        }
    }

    /// Returns true if the command printed nothing
    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    /// Output with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.combined.trim()
    }
}

/// Trait for running external tools
pub trait CommandRunner {
    /// Run `program` with `args` inside `working_dir`
    ///
    /// Blocks until the program exits. A non-zero exit status is an error that
    /// carries the combined output.
    fn run(
        &self,
        program: &str,
        args: &[&str],
        working_dir: &Path,
    ) -> Result<CommandOutput, CommandError>;
}

/// Default runner that executes real processes
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    /// Create a new system command runner
    pub fn new() -> Self {
        Self
    }
}

/// Render a command line for messages
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        working_dir: &Path,
    ) -> Result<CommandOutput, CommandError> {
        let command_str = display_command(program, args);
        log::debug!("running '{}' in {}", command_str, working_dir.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()
            .map_err(|e| CommandError::spawn(&command_str, e))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(CommandOutput::new(combined))
        } else {
            Err(CommandError::failed(command_str, output.status, combined))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command() {
        assert_eq!(display_command("git", &["pull"]), "git pull");
        assert_eq!(display_command("go", &["vet", "./..."]), "go vet ./...");
        assert_eq!(display_command("make", &[]), "make");
    }

    #[test]
    fn test_command_output_helpers() {
        let output = CommandOutput::new("master\n");
        assert!(!output.is_empty());
        assert_eq!(output.trimmed(), "master");
        assert!(CommandOutput::default().is_empty());
    }

    #[test]
    fn test_system_runner_missing_program() {
        let temp_dir = tempfile::tempdir().unwrap();
        let runner = SystemCommandRunner::new();
        let err = runner
            .run("gomod-bump-no-such-program", &["--help"], temp_dir.path())
            .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_combined_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let runner = SystemCommandRunner::new();
        let output = runner
            .run("sh", &["-c", "echo err 1>&2; echo out"], temp_dir.path())
            .unwrap();
        // stderr written first still lands after stdout
        assert_eq!(output.combined, "out\nerr\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_uses_working_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("marker.txt"), "").unwrap();
        let runner = SystemCommandRunner::new();
        let output = runner.run("ls", &[], temp_dir.path()).unwrap();
        assert!(output.combined.contains("marker.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_failure_embeds_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let runner = SystemCommandRunner::new();
        let err = runner
            .run("sh", &["-c", "echo broken 1>&2; exit 3"], temp_dir.path())
            .unwrap_err();
        match &err {
            CommandError::Failed { output, .. } => assert!(output.contains("broken")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(format!("{}", err).contains("broken"));
    }

    #[test]
    fn test_mock_runner_records_and_scripts() {
        use mock::MockRunner;

        let runner = MockRunner::new()
            .respond("git rev-parse", "master\n")
            .fail("git push", "rejected");
        let dir = Path::new("/work/svc");

        let branch = runner.run("git", &["rev-parse", "--abbrev-ref", "HEAD"], dir).unwrap();
        assert_eq!(branch.trimmed(), "master");
        assert!(runner.run("git", &["push"], dir).is_err());
        assert!(runner.run("git", &["pull"], dir).unwrap().is_empty());

        assert_eq!(runner.count("git"), 3);
        assert_eq!(runner.calls()[0].dir, dir.to_path_buf());
    }
}
