//! hookguard - Policy hooks for AI coding assistants
//!
//! The assistant invokes a hook before or after an action, passing a JSON
//! payload on stdin. The hook answers with an exit code: 0 lets the action
//! proceed, 2 blocks it. Anything that goes wrong inside a hook is logged and
//! the action proceeds.
//!
//! # Features
//!
//! - **File protection**: Blocks edits to lock files, env files and credential
//!   directories; warns on CI and deployment files
//! - **Secret scanning**: Blocks content carrying API keys, tokens and
//!   private keys, and reminds about risky code patterns
//! - **Prompt advice**: Suggests specialised agents and flags destructive
//!   requests
//! - **Command history**: Records every shell command the assistant runs
//! - **Auto-format**: Runs the matching formatter after an edit
//!
//! # Example
//!
//! ```
//! use hookguard::{Config, HookInput, PolicyEngine, PolicyKind};
//!
//! let engine = PolicyEngine::new(&Config::default()).unwrap();
//!
//! let input = r#"{"tool_name":"Write","tool_input":{"file_path":".env"}}"#;
//! let hook_input = HookInput::from_json(input).unwrap();
//!
//! let evaluation = engine.evaluate(PolicyKind::FileGuard, &hook_input).unwrap();
//! assert!(evaluation.verdict.is_block());
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod hooks;
pub mod input;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use config::{Config, Overrides};
pub use engine::{Policy, PolicyEngine, PolicyKind};
pub use error::HookError;
pub use hooks::{dispatch, Hook, HookContext};
pub use input::{HookInput, ToolInput};
pub use output::{Evaluation, Outcome, Verdict};
