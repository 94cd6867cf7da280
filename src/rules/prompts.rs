//! Prompt advisory rules
//!
//! Agent hints suggest a specialised agent for the task; only the first
//! matching hint is used, so the order of [`AGENT_HINTS`] matters. Dangerous
//! patterns flag destructive operations mentioned in a prompt; all of them
//! are reported. Every pattern is matched case-insensitively.

use crate::rules::AdvisoryRule;

/// Agent hints, in priority order
pub const AGENT_HINTS: &[AdvisoryRule] = &[
    AdvisoryRule::new(
        "reviewer",
        r"\b(review|check|look at)\b.*\b(code|changes|pr|pull request)\b",
        "Tip: Consider using the reviewer agent for thorough code reviews.",
    ),
    AdvisoryRule::new(
        "debugger",
        r"\b(bug|error|crash|fail|broken)\b",
        "Tip: The debugger agent specializes in systematic root cause analysis.",
    ),
    AdvisoryRule::new(
        "tester",
        r"\b(test|coverage|spec)\b",
        "Tip: The tester agent can help design comprehensive test strategies.",
    ),
    AdvisoryRule::new(
        "security-auditor",
        r"\b(security|auth|vulnerab|owasp)\b",
        "Tip: The security-auditor agent can perform OWASP Top 10 checks.",
    ),
    AdvisoryRule::new(
        "refactorer",
        r"\b(refactor|clean|improve|simplify)\b.*\b(code)\b",
        "Tip: The refactorer agent specializes in code structure improvements.",
    ),
    AdvisoryRule::new(
        "documentor",
        r"\b(document|readme|api docs)\b",
        "Tip: The documentor agent creates clear technical documentation.",
    ),
];

/// Destructive operations worth a warning
pub const DANGEROUS_PATTERNS: &[AdvisoryRule] = &[
    AdvisoryRule::new(
        "rm-rf-root-home",
        r"\brm\s+-rf\s+[/~]",
        "⚠️ Warning: Recursive delete from root/home detected",
    ),
    AdvisoryRule::new(
        "git-force-push",
        r"\bgit\s+push\s+.*--force",
        "⚠️ Warning: Force push detected - this rewrites history",
    ),
    AdvisoryRule::new(
        "git-reset-hard",
        r"\bgit\s+reset\s+--hard",
        "⚠️ Warning: Hard reset will lose uncommitted changes",
    ),
    AdvisoryRule::new(
        "drop-database",
        r"\bdrop\s+database\b",
        "⚠️ Warning: DROP DATABASE command detected",
    ),
    AdvisoryRule::new(
        "truncate-table",
        r"\btruncate\s+table\b",
        "⚠️ Warning: TRUNCATE TABLE will delete all data",
    ),
];
