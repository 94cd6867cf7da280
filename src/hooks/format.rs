//! Run the configured formatter on an edited file
//!
//! Best effort: a missing file, an unknown extension or a formatter that is
//! not installed are all silent no-ops. Failures and timeouts are recorded in
//! the hook log, and the hook always continues.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::audit::AuditLog;
use crate::config::FormatterConfig;
use crate::error::HookError;
use crate::hooks::environment::find_executable;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// What happened to the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Nothing to run
    Skipped,
    /// Formatter exited successfully
    Formatted,
    /// Formatter exited non-zero, with its stderr
    Failed(String),
    /// Formatter was killed after its timeout
    TimedOut,
}

/// Formatter for a path, keyed by lower-case extension with the dot
pub fn formatter_for<'a>(
    path: &Path,
    formatters: &'a BTreeMap<String, FormatterConfig>,
) -> Option<&'a FormatterConfig> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    formatters.get(&format!(".{}", ext))
}

/// Run the formatter for `path`, if one applies
pub fn format_file(
    path: &Path,
    formatters: &BTreeMap<String, FormatterConfig>,
    search_path: Option<&OsStr>,
) -> Result<FormatOutcome, HookError> {
    if !path.exists() {
        return Ok(FormatOutcome::Skipped);
    }
    let Some(formatter) = formatter_for(path, formatters) else {
        return Ok(FormatOutcome::Skipped);
    };
    let Some((program, args)) = formatter.command.split_first() else {
        return Ok(FormatOutcome::Skipped);
    };
    let Some(program) = find_executable(program, search_path) else {
        tracing::debug!(program = %program, "formatter not installed");
        return Ok(FormatOutcome::Skipped);
    };

    tracing::debug!(program = %program.display(), path = %path.display(), "running formatter");

    let mut child = Command::new(&program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| HookError::side_effect(format!("spawning {}", program.display()), e))?;

    // Grandchildren may hold the pipe open past the formatter's exit, so the
    // reader is never joined. Its text is taken over a channel before the deadline.
    let stderr = child.stderr.take();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut stderr) = stderr {
            let _ = stderr.read_to_string(&mut buf);
        }
        let _ = tx.send(buf);
    });

    let deadline = Instant::now() + Duration::from_secs(formatter.timeout_secs);
    loop {
        let status = child
            .try_wait()
            .map_err(|e| HookError::side_effect(format!("waiting on {}", program.display()), e))?;

        if let Some(status) = status {
            if status.success() {
                return Ok(FormatOutcome::Formatted);
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            let stderr = rx.recv_timeout(remaining).unwrap_or_default();
            return Ok(FormatOutcome::Failed(stderr));
        }

        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(FormatOutcome::TimedOut);
        }

        thread::sleep(POLL_INTERVAL);
    }
}

/// Write the hook log record for a formatter result, if it warrants one
pub fn record(path: &str, result: &Result<FormatOutcome, HookError>, log: &AuditLog, hook: &str) {
    let message = match result {
        Ok(FormatOutcome::Skipped | FormatOutcome::Formatted) => return,
        Ok(FormatOutcome::Failed(stderr)) if stderr.trim().is_empty() => return,
        Ok(FormatOutcome::Failed(stderr)) => {
            format!("Formatter failed for {}: {}", path, stderr.trim_end())
        }
        Ok(FormatOutcome::TimedOut) => format!("Formatter timeout for {}", path),
        Err(e) => format!("Formatter error for {}: {}", path, e),
    };
    tracing::warn!(path, %message, "formatter problem");
    log.hook_error(hook, &message);
}
