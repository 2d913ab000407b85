//! Core domain models for gomod-bump
//!
//! This module contains the fundamental types used throughout the application:
//! - Projects discovered from manifest files
//! - Dependency references and their pinned versions
//! - Per-project upgrade outcomes
//! - Summary structures for a whole run

mod dependency;
mod project;
mod summary;
mod update_result;

pub use dependency::{DependencyVersion, VERSION_NOT_FOUND, VERSION_UNKNOWN};
pub use project::Project;
pub use summary::{ProjectReport, RunSummary};
pub use update_result::{OutcomeKind, UpgradeOutcome};
