//! Append-only text logs for hookguard
//!
//! Two logs share one format, `[YYYY-MM-DD HH:MM:SS] <payload>`:
//! `hooks.log` collects error traces, `command-history.log` collects the shell
//! commands the assistant ran. Each record is written with a single append so
//! hooks running side by side never interleave partial lines.

use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::HookError;

/// File name of the error trace log
pub const HOOKS_LOG: &str = "hooks.log";

/// File name of the command history log
pub const COMMAND_LOG: &str = "command-history.log";

/// Format a record with the given timestamp.
///
/// Continuation lines are appended verbatim after the timestamped line.
pub fn format_record(timestamp: DateTime<Local>, payload: &str, continuation: &[String]) -> String {
    let mut record = format!("[{}] {}\n", timestamp.format("%Y-%m-%d %H:%M:%S"), payload);
    for line in continuation {
        record.push_str(line);
        record.push('\n');
    }
    record
}

/// An append-only log file
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    path: Option<PathBuf>,
}

impl AuditLog {
    /// Create a log writing to `path`; `None` disables it
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }

    /// A log that discards everything
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    /// Path of the log file, if enabled
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append one record, reporting failures
    pub fn try_append(&self, payload: &str, continuation: &[String]) -> Result<(), HookError> {
        let Some(ref path) = self.path else {
            return Ok(());
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                HookError::side_effect(format!("creating {}", parent.display()), e)
            })?;
        }

        let record = format_record(Local::now(), payload, continuation);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| HookError::side_effect(format!("opening {}", path.display()), e))?;

        file.write_all(record.as_bytes())
            .map_err(|e| HookError::side_effect(format!("writing {}", path.display()), e))
    }

    /// Append one record; failures are dropped, logging is never load-bearing
    pub fn append(&self, payload: &str) {
        self.append_with(payload, &[]);
    }

    /// Append a record with continuation lines, dropping failures
    pub fn append_with(&self, payload: &str, continuation: &[String]) {
        if let Err(e) = self.try_append(payload, continuation) {
            tracing::debug!(error = %e, "audit log write failed");
        }
    }

    /// Record an error trace for a hook: `[<hook>] <message>`
    pub fn hook_error(&self, hook: &str, message: &str) {
        self.append(&format!("[{}] {}", hook, message));
    }
}

/// The two logs a hook process writes to
#[derive(Debug, Clone, Default)]
pub struct Logs {
    pub hooks: AuditLog,
    pub commands: AuditLog,
}

impl Logs {
    /// Logs inside `dir`, or disabled logs when `enabled` is false
    pub fn in_dir(dir: &Path, enabled: bool) -> Self {
        if !enabled {
            return Self::default();
        }
        Self {
            hooks: AuditLog::new(Some(&dir.join(HOOKS_LOG))),
            commands: AuditLog::new(Some(&dir.join(COMMAND_LOG))),
        }
    }
}
