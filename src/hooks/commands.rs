//! Shell command history

use crate::audit::AuditLog;
use crate::error::HookError;
use crate::input::HookInput;

/// Append the command (and its description, if any) to the history log.
///
/// Inputs without a command are ignored.
pub fn log_command(input: &HookInput, log: &AuditLog) -> Result<(), HookError> {
    let Some(command) = input.command() else {
        return Ok(());
    };

    let continuation: Vec<String> = input
        .description()
        .map(|d| vec![format!("  Description: {}", d)])
        .unwrap_or_default();

    log.try_append(command, &continuation)
}
