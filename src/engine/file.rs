//! Protected file checking
//!
//! Decides whether an edit to a path is allowed, allowed with a warning, or
//! blocked, using only the path.

use crate::config::FilesConfig;
use crate::engine::Policy;
use crate::error::HookError;
use crate::input::HookInput;
use crate::matcher::PatternSet;
use crate::output::{Evaluation, Verdict};

/// Blocks or warns on edits to protected paths
#[derive(Debug, Clone)]
pub struct FileGuard {
    blocked: PatternSet,
    warned: PatternSet,
}

impl FileGuard {
    /// Compile from explicit pattern lists
    pub fn new<S: AsRef<str>>(blocked: &[S], warned: &[S]) -> Result<Self, HookError> {
        Ok(Self {
            blocked: PatternSet::compile(blocked)?,
            warned: PatternSet::compile(warned)?,
        })
    }

    /// Compile from the `[files]` config section
    pub fn from_config(config: &FilesConfig) -> Result<Self, HookError> {
        Self::new(&config.blocked_patterns, &config.warned_patterns)
    }

    /// Check a file path. Blocked patterns are checked first and win.
    pub fn check(&self, file_path: &str) -> Verdict {
        if file_path.is_empty() {
            return Verdict::Allow;
        }

        if let Some(pattern) = self.blocked.match_any(file_path) {
            return Verdict::Block(format!(
                "BLOCKED: {} matches protected pattern: {}",
                file_path, pattern
            ));
        }

        if let Some(pattern) = self.warned.match_any(file_path) {
            return Verdict::Warn(format!(
                "WARNING: editing sensitive file {}, matches pattern: {}",
                file_path, pattern
            ));
        }

        Verdict::Allow
    }
}

impl Policy for FileGuard {
    fn name(&self) -> &'static str {
        "file-guard"
    }

    fn evaluate(&self, input: &HookInput) -> Result<Evaluation, HookError> {
        let verdict = input
            .file_path()
            .map_or(Verdict::Allow, |path| self.check(path));
        Ok(Evaluation::from_verdict(verdict))
    }
}
