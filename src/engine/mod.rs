//! Policy engine for hookguard
//!
//! The catalog is compiled once into three policy components. Each hook
//! invocation runs exactly one of them through the [`Policy`] trait.

pub mod file;
pub mod prompt;
pub mod secrets;

pub use file::FileGuard;
pub use prompt::PromptAdvisor;
pub use secrets::SecretScanner;

use crate::config::{Config, Overrides};
use crate::error::HookError;
use crate::input::HookInput;
use crate::output::{Evaluation, Verdict};

/// Shared interface of the policy components
pub trait Policy {
    /// Component name used in logs
    fn name(&self) -> &'static str;

    /// Evaluate one hook input
    fn evaluate(&self, input: &HookInput) -> Result<Evaluation, HookError>;
}

/// Which component a hook runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    FileGuard,
    SecretScanner,
    PromptAdvisor,
}

/// The compiled rule catalog plus runtime overrides
#[derive(Debug)]
pub struct PolicyEngine {
    file_guard: FileGuard,
    secret_scanner: SecretScanner,
    prompt_advisor: PromptAdvisor,
    overrides: Overrides,
}

impl PolicyEngine {
    /// Compile every rule in the configuration
    pub fn new(config: &Config) -> Result<Self, HookError> {
        Ok(Self {
            file_guard: FileGuard::from_config(&config.files)?,
            secret_scanner: SecretScanner::from_config(&config.secrets)?,
            prompt_advisor: PromptAdvisor::builtin()?,
            overrides: Overrides::default(),
        })
    }

    /// Apply runtime overrides
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// The file guard component
    pub fn file_guard(&self) -> &FileGuard {
        &self.file_guard
    }

    /// The secret scanner component
    pub fn secret_scanner(&self) -> &SecretScanner {
        &self.secret_scanner
    }

    /// The prompt advisor component
    pub fn prompt_advisor(&self) -> &PromptAdvisor {
        &self.prompt_advisor
    }

    /// Active overrides
    pub fn overrides(&self) -> Overrides {
        self.overrides
    }

    /// Look up a component by kind
    pub fn policy(&self, kind: PolicyKind) -> &dyn Policy {
        match kind {
            PolicyKind::FileGuard => &self.file_guard,
            PolicyKind::SecretScanner => &self.secret_scanner,
            PolicyKind::PromptAdvisor => &self.prompt_advisor,
        }
    }

    /// Run one component and apply the overrides to its verdict
    pub fn evaluate(&self, kind: PolicyKind, input: &HookInput) -> Result<Evaluation, HookError> {
        let policy = self.policy(kind);

        if self.overrides.disabled {
            tracing::debug!(policy = policy.name(), "disabled via HOOKGUARD_DISABLED");
            return Ok(Evaluation::allow());
        }

        tracing::debug!(policy = policy.name(), input = %input.summary(), "evaluating");
        let mut evaluation = policy.evaluate(input)?;

        if self.overrides.warn_only && evaluation.verdict.is_block() {
            tracing::info!(policy = policy.name(), "block downgraded to warning");
            evaluation.verdict = evaluation.verdict.soften();
        }

        if let Verdict::Block(ref message) = evaluation.verdict {
            tracing::info!(policy = policy.name(), %message, "blocked");
        }

        Ok(evaluation)
    }
}
