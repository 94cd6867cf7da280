//! Secret detection rules for file content
//!
//! Each rule fires when its regex matches anywhere in the content. Rule order
//! is the order labels are reported in.

use crate::rules::SecretRule;

/// Built-in secret patterns
pub const SECRET_RULES: &[SecretRule] = &[
    // Generic assignments
    SecretRule::new(
        r#"(?i)(api[_-]?key|apikey)\s*[:=]\s*["']?[a-zA-Z0-9_-]{20,}"#,
        "API key",
    ),
    SecretRule::new(
        r#"(?i)(secret|password|passwd|pwd)\s*[:=]\s*["'][^"']+["']"#,
        "Password/Secret (quoted)",
    ),
    SecretRule::new(
        r#"(?i)(secret|password|passwd|pwd)\s*[:=]\s*[^"'\s]{8,}"#,
        "Password/Secret (unquoted)",
    ),
    SecretRule::new(r"(?i)bearer\s+[a-zA-Z0-9_-]{20,}", "Bearer token"),
    // GitHub
    SecretRule::new(r"ghp_[a-zA-Z0-9]{36}", "GitHub Personal Access Token"),
    SecretRule::new(
        r"github_pat_[a-zA-Z0-9]{22}_[a-zA-Z0-9]{59}",
        "GitHub PAT (fine-grained)",
    ),
    SecretRule::new(r"gho_[a-zA-Z0-9]{36}", "GitHub OAuth Access Token"),
    SecretRule::new(r"ghs_[a-zA-Z0-9]{36}", "GitHub Server-to-Server Token"),
    // LLM providers
    SecretRule::new(r"sk-[a-zA-Z0-9]{48}", "OpenAI API Key"),
    SecretRule::new(r"sk-ant-[a-zA-Z0-9-]{90,}", "Anthropic API Key"),
    // Key material
    SecretRule::new(
        r"-----BEGIN (?:RSA |EC |DSA |OPENSSH )?PRIVATE KEY-----",
        "Private key",
    ),
    SecretRule::new(r"-----BEGIN CERTIFICATE-----", "Certificate"),
    // Cloud
    SecretRule::new(
        r"(?i)aws[_-]?access[_-]?key[_-]?id\s*[:=]\s*[A-Z0-9]{20}",
        "AWS Access Key",
    ),
    SecretRule::new(
        r"(?i)aws[_-]?secret[_-]?access[_-]?key\s*[:=]\s*[a-zA-Z0-9/+=]{40}",
        "AWS Secret Key",
    ),
    SecretRule::new(
        r"xox[baprs]-[0-9]{10,13}-[0-9]{10,13}-[a-zA-Z0-9]{24,}",
        "Slack Token",
    ),
    SecretRule::new(r"AIza[0-9A-Za-z_-]{35}", "Google API Key"),
    SecretRule::new(r"ya29\.[0-9A-Za-z_-]+", "Google OAuth Access Token"),
    SecretRule::new(
        r"[0-9]+-[0-9A-Za-z_-]{32}\.apps\.googleusercontent\.com",
        "Google OAuth2 ID",
    ),
    // Overlaps the Google rule. The `\\-_` range runs from `\` to
    // `_`, so a key containing `-` is only reported as a Google key.
    SecretRule::new(r"AIza[0-9A-Za-z\\-_]{35}", "Firebase API Key"),
    SecretRule::new(
        r"eyJ[a-zA-Z0-9_-]*\.eyJ[a-zA-Z0-9_-]*\.[a-zA-Z0-9_-]*",
        "JWT Token",
    ),
    // Connection strings
    SecretRule::new(
        r"(?i)(postgres|mysql|mongodb)://[^:]+:[^@]+@",
        "Database URL with credentials",
    ),
    SecretRule::new(r"(?i)jdbc:[^:]+://[^:]+:[^@]+@", "JDBC URL with credentials"),
    SecretRule::new(r"(?i)redis://:[^@]+@", "Redis URL with password"),
];

/// Basenames that are never scanned: templates and lock files full of hashes
pub const SKIP_FILES: &[&str] = &[
    ".env.example",
    ".env.template",
    ".env.sample",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
];

/// Look up a built-in rule by label
pub fn rule_by_label(label: &str) -> Option<&'static SecretRule> {
    SECRET_RULES.iter().find(|r| r.label == label)
}
