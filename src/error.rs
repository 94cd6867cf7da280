//! Error types for hookguard
//!
//! Every failure inside a hook is one of these. The dispatcher never lets any
//! of them block the host action: they are logged and the hook exits 0.

use std::io;

use thiserror::Error;

/// Errors raised while running a hook
#[derive(Debug, Error)]
pub enum HookError {
    /// The structured payload on stdin was not valid hook JSON
    #[error("malformed hook input: {0}")]
    InputParse(#[from] serde_json::Error),

    /// Stdin could not be read
    #[error("unreadable hook input: {0}")]
    InputRead(#[source] io::Error),

    /// A policy component failed (bad compiled rule, caught panic)
    #[error("policy evaluation failed: {0}")]
    PolicyEvaluation(String),

    /// Log write or subprocess failure
    #[error("{context}: {source}")]
    SideEffect {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl HookError {
    /// Wrap an I/O error from a side effect with a short description
    pub fn side_effect(context: impl Into<String>, source: io::Error) -> Self {
        HookError::SideEffect {
            context: context.into(),
            source,
        }
    }

    /// Short category name used in log records
    pub fn kind(&self) -> &'static str {
        match self {
            HookError::InputParse(_) | HookError::InputRead(_) => "InputParseError",
            HookError::PolicyEvaluation(_) | HookError::Config(_) => "PolicyEvaluationError",
            HookError::SideEffect { .. } => "SideEffectError",
        }
    }
}

impl From<toml::de::Error> for HookError {
    fn from(err: toml::de::Error) -> Self {
        HookError::Config(err.to_string())
    }
}

impl From<regex::Error> for HookError {
    fn from(err: regex::Error) -> Self {
        HookError::PolicyEvaluation(format!("invalid rule pattern: {}", err))
    }
}

impl From<globset::Error> for HookError {
    fn from(err: globset::Error) -> Self {
        HookError::PolicyEvaluation(format!("invalid glob pattern: {}", err))
    }
}
