//! Prompt advice
//!
//! Attaches at most one agent hint and every matching danger warning to a
//! submitted prompt. Never blocks.

use regex::{RegexSet, RegexSetBuilder};

use crate::engine::Policy;
use crate::error::HookError;
use crate::input::HookInput;
use crate::output::Evaluation;
use crate::rules::prompts::{AGENT_HINTS, DANGEROUS_PATTERNS};
use crate::rules::AdvisoryRule;

/// Compiled advisory rules with their messages
#[derive(Debug, Clone)]
struct AdvisorySet {
    patterns: RegexSet,
    messages: Vec<&'static str>,
}

impl AdvisorySet {
    fn compile(rules: &[AdvisoryRule]) -> Result<Self, HookError> {
        let patterns = RegexSetBuilder::new(rules.iter().map(|r| r.pattern))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            patterns,
            messages: rules.iter().map(|r| r.message).collect(),
        })
    }

    /// Messages of matching rules in catalog order
    fn matching<'a>(&'a self, text: &str) -> impl Iterator<Item = &'static str> + 'a {
        self.patterns
            .matches(text)
            .into_iter()
            .map(move |idx| self.messages[idx])
    }
}

/// Suggests agents and flags destructive requests in prompts
#[derive(Debug, Clone)]
pub struct PromptAdvisor {
    hints: AdvisorySet,
    dangerous: AdvisorySet,
}

impl PromptAdvisor {
    /// Compile explicit rule tables
    pub fn new(hints: &[AdvisoryRule], dangerous: &[AdvisoryRule]) -> Result<Self, HookError> {
        Ok(Self {
            hints: AdvisorySet::compile(hints)?,
            dangerous: AdvisorySet::compile(dangerous)?,
        })
    }

    /// Compile the built-in tables
    pub fn builtin() -> Result<Self, HookError> {
        Self::new(AGENT_HINTS, DANGEROUS_PATTERNS)
    }

    /// Messages for a prompt: the first matching hint, then every warning
    pub fn advise(&self, prompt: &str) -> Vec<String> {
        if prompt.is_empty() {
            return Vec::new();
        }

        self.hints
            .matching(prompt)
            .take(1)
            .chain(self.dangerous.matching(prompt))
            .map(String::from)
            .collect()
    }
}

impl Policy for PromptAdvisor {
    fn name(&self) -> &'static str {
        "prompt-advisor"
    }

    fn evaluate(&self, input: &HookInput) -> Result<Evaluation, HookError> {
        let notes = input.prompt().map(|p| self.advise(p)).unwrap_or_default();
        Ok(Evaluation::allow().with_notes(notes))
    }
}
