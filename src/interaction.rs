//! Per-project confirmation
//!
//! The pipeline asks a `DecisionSource` before it touches a project. The
//! interactive source prompts on a terminal; the automatic ones make the
//! pipeline testable without simulating input.

use crate::domain::Project;
use crate::error::UpdaterError;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Something that can approve or decline upgrading a project
pub trait DecisionSource {
    /// Returns true to go ahead with `project`
    fn confirm(&mut self, project: &Project) -> Result<bool, UpdaterError>;
}

/// Approves every project
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoApprove;

impl DecisionSource for AutoApprove {
    fn confirm(&mut self, _project: &Project) -> Result<bool, UpdaterError> {
        Ok(true)
    }
}

/// Declines every project
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoDecline;

impl DecisionSource for AutoDecline {
    fn confirm(&mut self, _project: &Project) -> Result<bool, UpdaterError> {
        Ok(false)
    }
}

/// Prompts for each project and reads the answer line by line
///
/// Only `y` and `yes` (case-sensitive) approve. End of input declines.
pub struct InteractivePrompt<R, W> {
    input: R,
    output: W,
}

impl InteractivePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on standard output and read from standard input
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InteractivePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// Returns true if the answer approves
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer, "y" | "yes")
}

impl<R: BufRead, W: Write> DecisionSource for InteractivePrompt<R, W> {
    fn confirm(&mut self, project: &Project) -> Result<bool, UpdaterError> {
        let prompt = format!(">>> Continue with {}?", project.dir.display());
        writeln!(self.output, "{}", prompt.yellow()).map_err(UpdaterError::Prompt)?;
        self.output.flush().map_err(UpdaterError::Prompt)?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .map_err(UpdaterError::Prompt)?;
        if read == 0 {
            return Ok(false);
        }

        let answer = answer.strip_suffix('\n').unwrap_or(&answer);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(is_affirmative(answer))
    }
}
