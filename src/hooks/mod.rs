//! Hook registry and dispatch
//!
//! Every hook runs the same lifecycle: parse the payload, execute exactly one
//! component, render the outcome. Any error along the way is logged to
//! `hooks.log` and the hook exits 0; only a successful `Block` verdict stops
//! the host action.

pub mod commands;
pub mod environment;
pub mod format;

use std::any::Any;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use crate::audit::Logs;
use crate::config::{Config, FormatterConfig, Overrides};
use crate::engine::{PolicyEngine, PolicyKind};
use crate::error::HookError;
use crate::input::HookInput;
use crate::output::{Evaluation, Outcome};

/// The registered hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    /// Block or warn on edits to protected paths
    ProtectFiles,
    /// Block edits that contain secrets, surface security reminders
    SecurityCheck,
    /// Attach agent tips and danger warnings to prompts
    ValidatePrompt,
    /// Record shell commands in the command history
    LogCommands,
    /// Run the formatter for an edited file
    FormatOnEdit,
    /// Report missing tools and setup steps at session start
    ValidateEnvironment,
}

impl Hook {
    /// Every hook, in help order
    pub const ALL: [Hook; 6] = [
        Hook::ProtectFiles,
        Hook::SecurityCheck,
        Hook::ValidatePrompt,
        Hook::LogCommands,
        Hook::FormatOnEdit,
        Hook::ValidateEnvironment,
    ];

    /// Command-line name
    pub fn name(self) -> &'static str {
        match self {
            Hook::ProtectFiles => "protect-files",
            Hook::SecurityCheck => "security-check",
            Hook::ValidatePrompt => "validate-prompt",
            Hook::LogCommands => "log-commands",
            Hook::FormatOnEdit => "format-on-edit",
            Hook::ValidateEnvironment => "validate-environment",
        }
    }

    /// Parse a command-line name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|hook| hook.name() == name)
    }

    /// One-line description for `--help`
    pub fn description(self) -> &'static str {
        match self {
            Hook::ProtectFiles => "PreToolUse (Edit|Write): block lock/env/credential files",
            Hook::SecurityCheck => "PreToolUse (Edit|Write): block secrets in content",
            Hook::ValidatePrompt => "UserPromptSubmit: agent tips and danger warnings",
            Hook::LogCommands => "PreToolUse (Bash): append to command-history.log",
            Hook::FormatOnEdit => "PostToolUse (Edit|Write): run the file's formatter",
            Hook::ValidateEnvironment => "SessionStart: check tools and project setup",
        }
    }

    /// The policy component this hook runs, if it is a policy hook
    pub fn policy(self) -> Option<PolicyKind> {
        match self {
            Hook::ProtectFiles => Some(PolicyKind::FileGuard),
            Hook::SecurityCheck => Some(PolicyKind::SecretScanner),
            Hook::ValidatePrompt => Some(PolicyKind::PromptAdvisor),
            Hook::LogCommands | Hook::FormatOnEdit | Hook::ValidateEnvironment => None,
        }
    }

    /// Run the hook's component against a parsed input
    pub fn execute(self, input: &HookInput, ctx: &HookContext) -> Result<Evaluation, HookError> {
        if let Some(kind) = self.policy() {
            return ctx.engine.evaluate(kind, input);
        }
        match self {
            // Covered by `policy` above
            Hook::ProtectFiles | Hook::SecurityCheck | Hook::ValidatePrompt => Ok(Evaluation::allow()),
            Hook::LogCommands => {
                if let Err(e) = commands::log_command(input, &ctx.logs.commands) {
                    tracing::debug!(error = %e, "command history write failed");
                }
                Ok(Evaluation::allow())
            }
            Hook::FormatOnEdit => {
                if let Some(path) = input.file_path() {
                    let result =
                        format::format_file(Path::new(path), &ctx.formatters, ctx.search_path.as_deref());
                    format::record(path, &result, &ctx.logs.hooks, self.name());
                }
                Ok(Evaluation::allow())
            }
            Hook::ValidateEnvironment => {
                let report = environment::probe(&ctx.project_dir, ctx.search_path.as_deref());
                Ok(Evaluation::allow().with_notes(report.lines()))
            }
        }
    }
}

/// Everything a hook needs, built once per process
#[derive(Debug)]
pub struct HookContext {
    pub engine: PolicyEngine,
    pub logs: Logs,
    pub project_dir: PathBuf,
    pub formatters: BTreeMap<String, FormatterConfig>,
    /// `PATH` used to locate external tools
    pub search_path: Option<OsString>,
}

impl HookContext {
    /// Compile the catalog and resolve log locations
    pub fn new(
        config: &Config,
        project_dir: PathBuf,
        overrides: Overrides,
    ) -> Result<Self, HookError> {
        let logs = Logs::in_dir(&config.log_dir(&project_dir), config.general.audit_log);
        Self::with_logs(config, project_dir, overrides, logs)
    }

    /// Like [`HookContext::new`] with explicit logs
    pub fn with_logs(
        config: &Config,
        project_dir: PathBuf,
        overrides: Overrides,
        logs: Logs,
    ) -> Result<Self, HookError> {
        Ok(Self {
            engine: PolicyEngine::new(config)?.with_overrides(overrides),
            logs,
            project_dir,
            formatters: config.formatters.clone(),
            search_path: std::env::var_os("PATH"),
        })
    }

    /// Replace the tool search path
    pub fn with_search_path(mut self, search_path: Option<OsString>) -> Self {
        self.search_path = search_path;
        self
    }
}

/// Log an error and continue: the fail-open exit
pub fn fail_open(hook: Hook, logs: &Logs, err: &HookError) -> Outcome {
    tracing::warn!(hook = hook.name(), kind = err.kind(), error = %err, "failing open");
    logs.hooks.hook_error(hook.name(), &format!("ERROR: {}: {}", err.kind(), err));
    Outcome::proceed()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run a component, turning a panic into a policy error
pub fn guarded<F>(f: F) -> Result<Evaluation, HookError>
where
    F: FnOnce() -> Result<Evaluation, HookError>,
{
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        Err(HookError::PolicyEvaluation(format!(
            "panic: {}",
            panic_message(payload.as_ref())
        )))
    })
}

/// Parse a raw payload and run the hook
pub fn dispatch(hook: Hook, raw: &str, ctx: &HookContext) -> Outcome {
    let input = match HookInput::from_json(raw) {
        Ok(input) => input,
        Err(e) => return fail_open(hook, &ctx.logs, &e),
    };

    match guarded(|| hook.execute(&input, ctx)) {
        Ok(evaluation) => Outcome::from_evaluation(evaluation),
        Err(e) => fail_open(hook, &ctx.logs, &e),
    }
}

/// Read the whole payload from `reader`, then dispatch
pub fn run(hook: Hook, mut reader: impl Read, ctx: &HookContext) -> Outcome {
    let mut raw = String::new();
    if let Err(e) = reader.read_to_string(&mut raw) {
        return fail_open(hook, &ctx.logs, &HookError::InputRead(e));
    }
    dispatch(hook, &raw, ctx)
}
