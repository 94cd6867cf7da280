//! Secret scanning for file content
//!
//! Blocks edits whose content matches a secret rule, unless the file is on
//! the skip-list or looks like a test fixture. Independently collects
//! security reminders, which never affect the verdict.

use regex::RegexSet;
use std::collections::BTreeSet;

use crate::config::SecretsConfig;
use crate::engine::Policy;
use crate::error::HookError;
use crate::input::HookInput;
use crate::matcher::{basename, is_test_file, normalize};
use crate::output::{Evaluation, Verdict};
use crate::rules::reminders::REMINDER_RULES;
use crate::rules::secrets::SECRET_RULES;
use crate::rules::ReminderRule;

/// Scans edit content for credentials
#[derive(Debug, Clone)]
pub struct SecretScanner {
    rules: RegexSet,
    labels: Vec<String>,
    skip_files: BTreeSet<String>,
    reminders: &'static [ReminderRule],
}

impl SecretScanner {
    /// Compile the built-in rules plus the configured extras
    pub fn from_config(config: &SecretsConfig) -> Result<Self, HookError> {
        let mut patterns: Vec<&str> = SECRET_RULES.iter().map(|r| r.pattern).collect();
        let mut labels: Vec<String> = SECRET_RULES.iter().map(|r| r.label.to_string()).collect();

        for extra in &config.extra_rules {
            patterns.push(&extra.pattern);
            labels.push(extra.label.clone());
        }

        Ok(Self {
            rules: RegexSet::new(&patterns)?,
            labels,
            skip_files: config.skip_files.iter().cloned().collect(),
            reminders: REMINDER_RULES,
        })
    }

    /// Whether the secret check runs for this path at all
    pub fn should_scan(&self, file_path: &str) -> bool {
        let normalized = normalize(file_path);
        !self.skip_files.contains(basename(&normalized)) && !is_test_file(file_path)
    }

    /// Labels of every rule that fires, deduplicated, in catalog order
    pub fn detect(&self, content: &str) -> Vec<&str> {
        let mut found: Vec<&str> = Vec::new();
        for idx in self.rules.matches(content).iter() {
            let label = self.labels[idx].as_str();
            if !found.contains(&label) {
                found.push(label);
            }
        }
        found
    }

    /// Reminders whose path or content condition holds, one entry per rule
    pub fn reminders(&self, file_path: &str, content: &str) -> Vec<String> {
        let normalized = normalize(file_path);
        self.reminders
            .iter()
            .filter(|rule| rule.matches_path(&normalized) || rule.matches_content(content))
            .map(|rule| rule.reminder.to_string())
            .collect()
    }

    /// Evaluate a (path, content) pair: the verdict plus any reminders
    pub fn scan(&self, file_path: &str, content: &str) -> (Verdict, Vec<String>) {
        if file_path.is_empty() {
            return (Verdict::Allow, Vec::new());
        }

        let verdict = if !content.is_empty() && self.should_scan(file_path) {
            let labels = self.detect(content);
            if labels.is_empty() {
                Verdict::Allow
            } else {
                Verdict::Block(block_message(file_path, &labels))
            }
        } else {
            Verdict::Allow
        };

        (verdict, self.reminders(file_path, content))
    }
}

/// Block message listing secret types; matched text is never included
fn block_message(file_path: &str, labels: &[&str]) -> String {
    let mut lines = vec![format!("BLOCKED - Security issue detected in {}:", file_path)];
    lines.extend(labels.iter().map(|label| format!("  - Potential {} detected", label)));
    lines.push(String::new());
    lines.push("This edit has been BLOCKED to prevent committing secrets.".to_string());
    lines.push(
        "If this is a false positive, add the file to [secrets] skip_files in hookguard.toml"
            .to_string(),
    );
    lines.join("\n")
}

impl Policy for SecretScanner {
    fn name(&self) -> &'static str {
        "secret-scanner"
    }

    fn evaluate(&self, input: &HookInput) -> Result<Evaluation, HookError> {
        let Some(file_path) = input.file_path() else {
            return Ok(Evaluation::allow());
        };

        let (verdict, reminders) = self.scan(file_path, &input.content());
        Ok(Evaluation::from_verdict(verdict).with_reminders(reminders))
    }
}
