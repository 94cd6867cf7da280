//! Protected path rules for file edits
//!
//! Blocked patterns stop the edit outright; warned patterns let it through
//! with a notice. Directory rules use `**` since `*` stops at `/`.

/// Lock files, environment files and credential directories
pub const BLOCKED_PATTERNS: &[&str] = &[
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
];

/// CI, container and production configuration
pub const WARNED_PATTERNS: &[&str] = &[
    ".github/workflows/**",
    "docker-compose.yml",
    "Dockerfile",
    "**/production/**",
];
