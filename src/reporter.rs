//! Progress reporting for the upgrade pipeline
//!
//! The pipeline only talks to a `Reporter`; how messages are rendered is up
//! to the implementation. `LogReporter` forwards to the `log` facade with the
//! project name as a prefix.

use log::Level;

/// Sink for leveled, per-project messages
pub trait Reporter {
    /// Record `message` about `project` at `level`
    fn report(&self, level: Level, project: &str, message: &str);

    fn debug(&self, project: &str, message: &str) {
        self.report(Level::Debug, project, message);
    }

    fn info(&self, project: &str, message: &str) {
        self.report(Level::Info, project, message);
    }

    fn warn(&self, project: &str, message: &str) {
        self.report(Level::Warn, project, message);
    }

    fn error(&self, project: &str, message: &str) {
        self.report(Level::Error, project, message);
    }
}

/// Reporter backed by the `log` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

/// "project: message"
pub fn prefixed(project: &str, message: &str) -> String {
    format!("{}: {}", project, message)
}

impl Reporter for LogReporter {
    fn report(&self, level: Level, project: &str, message: &str) {
        log::log!(level, "{}", prefixed(project, message));
    }
}
