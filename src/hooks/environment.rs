//! Session start environment probe
//!
//! Looks for the tools the assistant commonly shells out to and for project
//! setup steps that are easy to forget. Purely informational.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Tools probed on PATH: (program, found message, missing warning)
const TOOLS: &[(&str, &str, &str)] = &[
    ("node", "Node.js available", "Node.js not found - npm commands may fail"),
    ("python3", "Python 3 available", "Python 3 not found - some hooks may fail"),
    ("git", "Git available", "Git not found - version control commands unavailable"),
];

/// What the probe found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentReport {
    pub info: Vec<String>,
    pub warnings: Vec<String>,
}

impl EnvironmentReport {
    /// Render the report as stdout lines; empty when there is nothing to say
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.info.is_empty() {
            lines.push("Environment check:".to_string());
            lines.extend(self.info.iter().map(|item| format!("  ✓ {}", item)));
        }
        if !self.warnings.is_empty() {
            lines.push(String::new());
            lines.push("Warnings:".to_string());
            lines.extend(self.warnings.iter().map(|w| format!("  ⚠️  {}", w)));
        }
        lines
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Locate `program` on a PATH-style search list.
///
/// Names containing a separator are checked as given.
pub fn find_executable(program: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if program.contains('/') {
        let path = PathBuf::from(program);
        return is_executable(&path).then_some(path);
    }

    env::split_paths(search_path?)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

/// Probe tools on `search_path` and setup files under `project_dir`
pub fn probe(project_dir: &Path, search_path: Option<&OsStr>) -> EnvironmentReport {
    let mut report = EnvironmentReport::default();

    for (program, found, missing) in TOOLS {
        if find_executable(program, search_path).is_some() {
            report.info.push(found.to_string());
        } else {
            report.warnings.push(missing.to_string());
        }
    }

    if project_dir.join(".env.example").exists() && !project_dir.join(".env").exists() {
        report.warnings.push(
            "No .env file found but .env.example exists - copy and configure it".to_string(),
        );
    }

    if project_dir.join("package.json").exists() && !project_dir.join("node_modules").exists() {
        report
            .warnings
            .push("node_modules not found - run 'npm install' first".to_string());
    }

    tracing::debug!(
        info = report.info.len(),
        warnings = report.warnings.len(),
        "environment probed"
    );
    report
}
