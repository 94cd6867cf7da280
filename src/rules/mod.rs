//! Rule catalog for hookguard
//!
//! Rules are plain data tables. They are compiled once per process by
//! [`crate::engine::PolicyEngine`] and never mutated afterwards.

pub mod prompts;
pub mod protected;
pub mod reminders;
pub mod secrets;

/// A secret-detection rule.
///
/// Only the label is ever shown to the user, never the matched text.
#[derive(Debug, Clone)]
pub struct SecretRule {
    /// Regex pattern; case-insensitive rules carry an inline `(?i)`
    pub pattern: &'static str,

    /// Human-readable name of the secret type
    pub label: &'static str,
}

impl SecretRule {
    /// Create a new secret rule
    pub const fn new(pattern: &'static str, label: &'static str) -> Self {
        Self { pattern, label }
    }
}

/// A contextual reminder.
///
/// Fires on a path condition (any substring, plus one of the suffixes when
/// suffixes are given) or on a content condition (any substring). Either
/// trigger yields the same reminder once.
#[derive(Debug, Clone)]
pub struct ReminderRule {
    /// Rule name, used in logs and tests
    pub name: &'static str,

    /// Path must contain one of these
    pub path_substrings: &'static [&'static str],

    /// Path must also end with one of these (ignored when empty)
    pub path_suffixes: &'static [&'static str],

    /// Content must contain one of these
    pub content_substrings: &'static [&'static str],

    /// Advisory text
    pub reminder: &'static str,
}

impl ReminderRule {
    /// Path-triggered reminder
    pub const fn path(
        name: &'static str,
        path_substrings: &'static [&'static str],
        path_suffixes: &'static [&'static str],
        reminder: &'static str,
    ) -> Self {
        Self {
            name,
            path_substrings,
            path_suffixes,
            content_substrings: &[],
            reminder,
        }
    }

    /// Content-triggered reminder
    pub const fn content(
        name: &'static str,
        content_substrings: &'static [&'static str],
        reminder: &'static str,
    ) -> Self {
        Self {
            name,
            path_substrings: &[],
            path_suffixes: &[],
            content_substrings,
            reminder,
        }
    }

    /// Check the path condition against a normalized path
    pub fn matches_path(&self, normalized: &str) -> bool {
        if !self.path_substrings.iter().any(|s| normalized.contains(s)) {
            return false;
        }
        self.path_suffixes.is_empty() || self.path_suffixes.iter().any(|s| normalized.ends_with(s))
    }

    /// Check the content condition; empty content never matches
    pub fn matches_content(&self, content: &str) -> bool {
        !content.is_empty() && self.content_substrings.iter().any(|s| content.contains(s))
    }
}

/// A regex paired with the message it produces (agent hints, dangerous prompts)
#[derive(Debug, Clone)]
pub struct AdvisoryRule {
    /// Unique identifier for this rule
    pub id: &'static str,

    /// Regex pattern, matched case-insensitively
    pub pattern: &'static str,

    /// Message shown when the pattern matches
    pub message: &'static str,
}

impl AdvisoryRule {
    /// Create a new advisory rule
    pub const fn new(id: &'static str, pattern: &'static str, message: &'static str) -> Self {
        Self {
            id,
            pattern,
            message,
        }
    }
}
