//! Dependency version lookup in go.mod files
//!
//! The default mode is a literal line scan: the first line that contains the
//! dependency name as a substring decides the result, and the token after the
//! one holding the name is returned verbatim. A name that is a substring of
//! another module path therefore matches that path too. `MatchMode::ExactModule`
//! only accepts `require` lines and block entries naming exactly the module.

use crate::domain::DependencyVersion;
use regex::Regex;
use std::path::Path;

/// How manifest lines are matched against the dependency name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Any line containing the name
    #[default]
    Substring,
    /// `require <module> <version>` or a require-block entry for exactly `<module>`
    ExactModule,
}

/// Read the pinned version of `dependency` from the manifest at `path`
///
/// An unreadable manifest yields `DependencyVersion::Unknown`.
pub fn read_dependency_version(
    path: &Path,
    dependency: &str,
    mode: MatchMode,
) -> DependencyVersion {
    match std::fs::read(path) {
        Ok(bytes) => {
            find_dependency_version(&String::from_utf8_lossy(&bytes), dependency, mode)
        }
        Err(_) => DependencyVersion::Unknown,
    }
}

/// Find the pinned version of `dependency` in manifest content
pub fn find_dependency_version(
    content: &str,
    dependency: &str,
    mode: MatchMode,
) -> DependencyVersion {
    match mode {
        MatchMode::Substring => find_by_substring(content, dependency),
        MatchMode::ExactModule => find_by_module(content, dependency),
    }
}

fn find_by_substring(content: &str, dependency: &str) -> DependencyVersion {
    let Some(line) = content.lines().find(|line| line.contains(dependency)) else {
        return DependencyVersion::NotFound;
    };

    let mut tokens = line.split_whitespace();
    if tokens.by_ref().any(|token| token.contains(dependency)) {
        if let Some(version) = tokens.next() {
            return DependencyVersion::Found(version.to_string());
        }
    }

    DependencyVersion::NotFound
}

fn find_by_module(content: &str, dependency: &str) -> DependencyVersion {
    let pattern = format!(
        r"^\s*(?:require\s+)?{}\s+([^\s=]\S*)",
        regex::escape(dependency)
    );
    let Ok(re) = Regex::new(&pattern) else {
        return DependencyVersion::NotFound;
    };

    content
        .lines()
        .find_map(|line| re.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| DependencyVersion::Found(m.as_str().to_string()))
        .unwrap_or(DependencyVersion::NotFound)
}
