//! Configuration loading for hookguard
//!
//! Supports TOML configuration with embedded defaults. Every default mirrors
//! the built-in rule catalog, so an empty file changes nothing.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::HookError;
use crate::rules::{protected, secrets};

/// Name of the per-project config file inside `<project>/.claude/`
pub const PROJECT_CONFIG_FILE: &str = "hookguard.toml";

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Write hooks.log and command-history.log
    pub audit_log: bool,

    /// Directory for log files (defaults to `<project>/.claude`)
    pub log_dir: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            audit_log: true,
            log_dir: None,
        }
    }
}

/// Protected file patterns
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Globs that block an edit
    pub blocked_patterns: Vec<String>,

    /// Globs that allow an edit with a warning
    pub warned_patterns: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            blocked_patterns: to_strings(protected::BLOCKED_PATTERNS),
            warned_patterns: to_strings(protected::WARNED_PATTERNS),
        }
    }
}

/// A user-defined secret pattern
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExtraSecretRule {
    /// Regex pattern
    pub pattern: String,

    /// Label reported when it fires
    pub label: String,
}

/// Secret scanning configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecretsConfig {
    /// Basenames exempt from scanning
    pub skip_files: Vec<String>,

    /// Rules appended after the built-in ones
    pub extra_rules: Vec<ExtraSecretRule>,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            skip_files: to_strings(secrets::SKIP_FILES),
            extra_rules: Vec::new(),
        }
    }
}

/// One formatter entry: command prefix plus a timeout
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Command and leading arguments; the file path is appended
    pub command: Vec<String>,

    /// Seconds before the formatter is killed
    #[serde(default = "default_formatter_timeout")]
    pub timeout_secs: u64,
}

fn default_formatter_timeout() -> u64 {
    10
}

impl FormatterConfig {
    fn new(command: &[&str]) -> Self {
        Self {
            command: to_strings(command),
            timeout_secs: default_formatter_timeout(),
        }
    }
}

/// Default formatter table keyed by lower-case extension (with dot)
pub fn default_formatters() -> BTreeMap<String, FormatterConfig> {
    const PRETTIER: &[&str] = &["npx", "prettier", "--write"];

    let mut table = BTreeMap::new();
    for ext in [
        ".js", ".jsx", ".ts", ".tsx", ".json", ".css", ".scss", ".md", ".yaml", ".yml",
    ] {
        table.insert(ext.to_string(), FormatterConfig::new(PRETTIER));
    }
    table.insert(".py".to_string(), FormatterConfig::new(&["black", "--quiet"]));
    table.insert(".go".to_string(), FormatterConfig::new(&["gofmt", "-w"]));
    table.insert(".rs".to_string(), FormatterConfig::new(&["rustfmt"]));
    table
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub files: FilesConfig,
    pub secrets: SecretsConfig,
    pub formatters: BTreeMap<String, FormatterConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            files: FilesConfig::default(),
            secrets: SecretsConfig::default(),
            formatters: default_formatters(),
        }
    }
}

impl Config {
    /// Candidate config files, most specific first
    pub fn search_paths(project_dir: &Path) -> Vec<PathBuf> {
        [
            // Project config
            Some(project_dir.join(".claude").join(PROJECT_CONFIG_FILE)),
            // User-specific config
            dirs::home_dir().map(|p| p.join(".claude/hookguard/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/hookguard/config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the first existing config file, or defaults.
    ///
    /// A file that exists but fails to parse is returned as an error together
    /// with the default configuration so the caller can log it and carry on.
    pub fn load(project_dir: &Path) -> (Self, Option<HookError>) {
        for path in Self::search_paths(project_dir) {
            if path.exists() {
                return match Self::load_from(&path) {
                    Ok(config) => (config, None),
                    Err(e) => (Config::default(), Some(e)),
                };
            }
        }

        (Config::default(), None)
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self, HookError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HookError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| HookError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Directory holding the hook logs
    pub fn log_dir(&self, project_dir: &Path) -> PathBuf {
        match self.general.log_dir {
            Some(ref dir) => Self::expand_path(dir),
            None => project_dir.join(".claude"),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Runtime overrides read once from the environment and command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Every policy allows (`HOOKGUARD_DISABLED`)
    pub disabled: bool,

    /// Blocks are downgraded to warnings (`HOOKGUARD_WARN_ONLY`, `--dry-run`)
    pub warn_only: bool,
}

impl Overrides {
    /// Read the override variables from the process environment
    pub fn from_env() -> Self {
        Self {
            disabled: std::env::var_os("HOOKGUARD_DISABLED").is_some(),
            warn_only: std::env::var_os("HOOKGUARD_WARN_ONLY").is_some(),
        }
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
audit_log = true
# log_dir = "~/.claude/hookguard/logs"

[files]
blocked_patterns = [
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Gemfile.lock",
    "poetry.lock",
    "Cargo.lock",
    ".env",
    ".env.local",
    ".env.production",
    "**/secrets/**",
    "**/credentials/**",
    ".git/**",
]
warned_patterns = [
    ".github/workflows/**",
    "docker-compose.yml",
    "Dockerfile",
    "**/production/**",
]

[secrets]
skip_files = [
    ".env.example",
    ".env.template",
    ".env.sample",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
]
# [[secrets.extra_rules]]
# pattern = "internal_token_[a-f0-9]{32}"
# label = "Internal service token"

# Replaces the whole table when present
[formatters]
".js" = { command = ["npx", "prettier", "--write"] }
".jsx" = { command = ["npx", "prettier", "--write"] }
".ts" = { command = ["npx", "prettier", "--write"] }
".tsx" = { command = ["npx", "prettier", "--write"] }
".json" = { command = ["npx", "prettier", "--write"] }
".css" = { command = ["npx", "prettier", "--write"] }
".scss" = { command = ["npx", "prettier", "--write"] }
".md" = { command = ["npx", "prettier", "--write"] }
".yaml" = { command = ["npx", "prettier", "--write"] }
".yml" = { command = ["npx", "prettier", "--write"] }
".py" = { command = ["black", "--quiet"] }
".go" = { command = ["gofmt", "-w"] }
".rs" = { command = ["rustfmt"], timeout_secs = 10 }
"#;
