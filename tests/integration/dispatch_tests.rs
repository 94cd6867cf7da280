//! Integration tests for the hook dispatch contract

use std::fs;
use std::path::{Path, PathBuf};

use hookguard::audit::Logs;
use hookguard::hooks::{self, Hook, HookContext};
use hookguard::output::{EXIT_BLOCK, EXIT_CONTINUE};
use hookguard::{Config, Outcome, Overrides};
use tempfile::TempDir;

struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn context(&self) -> HookContext {
        self.context_with(&Config::default(), Overrides::default())
    }

    fn context_with(&self, config: &Config, overrides: Overrides) -> HookContext {
        HookContext::new(config, self.path().to_path_buf(), overrides)
            .unwrap()
            .with_search_path(None)
    }

    fn log(&self, name: &str) -> PathBuf {
        self.path().join(".claude").join(name)
    }

    fn read_log(&self, name: &str) -> String {
        fs::read_to_string(self.log(name)).unwrap_or_default()
    }
}

fn edit_json(file_path: &str, content: &str) -> String {
    serde_json::json!({
        "tool_name": "Write",
        "hook_event_name": "PreToolUse",
        "tool_input": { "file_path": file_path, "content": content }
    })
    .to_string()
}

// ============================================================================
// Fail-open
// ============================================================================

#[test]
fn test_every_hook_fails_open_on_garbage() {
    for hook in Hook::ALL {
        let project = Project::new();
        let outcome = hooks::dispatch(hook, "this is not json", &project.context());

        assert_eq!(outcome, Outcome::proceed(), "{} should continue", hook.name());
        let log = project.read_log("hooks.log");
        assert_eq!(log.lines().count(), 1, "{} log: {:?}", hook.name(), log);
        assert!(log.contains(&format!("[{}] ERROR:", hook.name())));
    }
}

#[test]
fn test_empty_stdin_fails_open() {
    let project = Project::new();
    let outcome = hooks::run(Hook::SecurityCheck, "".as_bytes(), &project.context());
    assert_eq!(outcome.exit_code, EXIT_CONTINUE);
    assert_eq!(project.read_log("hooks.log").lines().count(), 1);
}

#[test]
fn test_error_record_format() {
    let project = Project::new();
    hooks::dispatch(Hook::ProtectFiles, "[1, 2", &project.context());

    let log = project.read_log("hooks.log");
    let line = log.lines().next().unwrap();
    // [YYYY-MM-DD HH:MM:SS] [hook] ERROR: ...
    assert_eq!(&line[0..1], "[");
    assert_eq!(&line[20..22], "] ");
    assert!(line[22..].starts_with("[protect-files] ERROR: InputParseError"));
}

#[test]
fn test_unwritable_log_still_continues() {
    let project = Project::new();
    // A file where the log directory should be
    fs::write(project.path().join(".claude"), "not a directory").unwrap();

    let outcome = hooks::dispatch(Hook::ValidatePrompt, "{", &project.context());
    assert_eq!(outcome, Outcome::proceed());
}

#[test]
fn test_audit_log_disabled() {
    let project = Project::new();
    let config: Config = toml::from_str("[general]\naudit_log = false\n").unwrap();
    let ctx = project.context_with(&config, Overrides::default());

    hooks::dispatch(Hook::ProtectFiles, "{", &ctx);
    assert!(!project.log("hooks.log").exists());
}

// ============================================================================
// Policy hooks
// ============================================================================

#[test]
fn test_protect_files_blocks_env() {
    let project = Project::new();
    let outcome = hooks::dispatch(Hook::ProtectFiles, &edit_json(".env", "X=1"), &project.context());

    assert_eq!(outcome.exit_code, EXIT_BLOCK);
    assert!(outcome.is_block());
    assert_eq!(outcome.stdout.len(), 1);
    assert!(outcome.stdout[0].contains("matches protected pattern: .env"));
    assert!(project.read_log("hooks.log").is_empty());
}

#[test]
fn test_mistyped_unused_fields_still_block() {
    let project = Project::new();
    let payloads = [
        r#"{"tool_input":{"file_path":".env","description":42}}"#,
        r#"{"session_id":7,"tool_input":{"file_path":".env"}}"#,
        r#"{"tool_name":["Edit"],"hook_event_name":null,"tool_input":{"file_path":".env","content":{},"edits":1}}"#,
    ];

    for payload in payloads {
        let outcome = hooks::dispatch(Hook::ProtectFiles, payload, &project.context());
        assert_eq!(outcome.exit_code, EXIT_BLOCK, "payload: {}", payload);
    }
    assert!(project.read_log("hooks.log").is_empty());
}

#[test]
fn test_protect_files_warns_and_continues() {
    let project = Project::new();
    let outcome = hooks::dispatch(Hook::ProtectFiles, &edit_json("Dockerfile", ""), &project.context());

    assert_eq!(outcome.exit_code, EXIT_CONTINUE);
    assert!(outcome.stdout[0].starts_with("⚠️ WARNING: editing sensitive file Dockerfile"));
}

#[test]
fn test_security_check_blocks_openai_key() {
    let project = Project::new();
    let content = format!("OPENAI_API_KEY = 'sk-{}'", "Q".repeat(48));
    let outcome = hooks::dispatch(
        Hook::SecurityCheck,
        &edit_json("src/config.py", &content),
        &project.context(),
    );

    assert_eq!(outcome.exit_code, EXIT_BLOCK);
    let text = outcome.stdout.join("\n");
    assert!(text.contains("Potential OpenAI API Key detected"));
    assert!(!text.contains(&"Q".repeat(48)));
}

#[test]
fn test_security_check_reminder_on_stderr() {
    let project = Project::new();
    let outcome = hooks::dispatch(
        Hook::SecurityCheck,
        &edit_json(".github/workflows/release.yml", ""),
        &project.context(),
    );

    assert_eq!(outcome.exit_code, EXIT_CONTINUE);
    assert!(outcome.stdout.is_empty());
    assert_eq!(outcome.stderr.len(), 1);
    assert!(outcome.stderr[0].starts_with("⚠️ You are editing a GitHub Actions workflow file"));
}

#[test]
fn test_dry_run_never_blocks() {
    let project = Project::new();
    let overrides = Overrides {
        warn_only: true,
        ..Overrides::default()
    };
    let ctx = project.context_with(&Config::default(), overrides);

    let outcome = hooks::dispatch(Hook::ProtectFiles, &edit_json("Cargo.lock", ""), &ctx);
    assert_eq!(outcome.exit_code, EXIT_CONTINUE);
    assert!(outcome.stdout[0].starts_with("⚠️ BLOCKED: Cargo.lock"));
}

#[test]
fn test_validate_prompt_output() {
    let project = Project::new();
    let outcome = hooks::dispatch(
        Hook::ValidatePrompt,
        r#"{"prompt":"review the code and then rm -rf ~/"}"#,
        &project.context(),
    );

    assert_eq!(outcome.exit_code, EXIT_CONTINUE);
    assert_eq!(
        outcome.stdout,
        vec![
            "Tip: Consider using the reviewer agent for thorough code reviews.",
            "⚠️ Warning: Recursive delete from root/home detected",
        ]
    );
}

#[test]
fn test_emit_writes_streams() {
    let project = Project::new();
    let outcome = hooks::dispatch(Hook::ProtectFiles, &edit_json(".env", ""), &project.context());

    let mut out = Vec::new();
    let mut err = Vec::new();
    outcome.emit(&mut out, &mut err).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "🚫 BLOCKED: .env matches protected pattern: .env\n"
    );
    assert!(err.is_empty());
}

// ============================================================================
// Side-effect hooks
// ============================================================================

#[test]
fn test_log_commands_appends_history() {
    let project = Project::new();
    let ctx = project.context();

    let first = serde_json::json!({
        "tool_name": "Bash",
        "tool_input": { "command": "cargo build", "description": "Build the crate" }
    });
    let second = serde_json::json!({
        "tool_name": "Bash",
        "tool_input": { "command": "git status" }
    });

    assert_eq!(hooks::dispatch(Hook::LogCommands, &first.to_string(), &ctx), Outcome::proceed());
    assert_eq!(hooks::dispatch(Hook::LogCommands, &second.to_string(), &ctx), Outcome::proceed());

    let history = project.read_log("command-history.log");
    let lines: Vec<&str> = history.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("] cargo build"));
    assert_eq!(lines[1], "  Description: Build the crate");
    assert!(lines[2].ends_with("] git status"));
}

#[test]
fn test_custom_log_dir() {
    let project = Project::new();
    let logs = TempDir::new().unwrap();
    let config: Config = toml::from_str(&format!(
        "[general]\nlog_dir = {:?}\n",
        logs.path().to_string_lossy()
    ))
    .unwrap();
    let ctx = project.context_with(&config, Overrides::default());

    let input = r#"{"tool_input":{"command":"ls"}}"#;
    hooks::dispatch(Hook::LogCommands, input, &ctx);

    assert!(logs.path().join("command-history.log").exists());
    assert!(!project.log("command-history.log").exists());
}

#[test]
fn test_format_on_edit_without_formatter_is_silent() {
    let project = Project::new();
    let file = project.path().join("main.rs");
    fs::write(&file, "fn main(){}").unwrap();

    let json = edit_json(&file.to_string_lossy(), "");
    let outcome = hooks::dispatch(Hook::FormatOnEdit, &json, &project.context());

    assert_eq!(outcome, Outcome::proceed());
    assert!(project.read_log("hooks.log").is_empty());
}

#[test]
fn test_validate_environment_reports_setup() {
    let project = Project::new();
    fs::write(project.path().join("package.json"), "{}").unwrap();

    let outcome = hooks::dispatch(
        Hook::ValidateEnvironment,
        r#"{"hook_event_name":"SessionStart"}"#,
        &project.context(),
    );

    assert_eq!(outcome.exit_code, EXIT_CONTINUE);
    assert!(outcome.stdout.contains(&"Warnings:".to_string()));
    assert!(outcome
        .stdout
        .iter()
        .any(|l| l == "  ⚠️  node_modules not found - run 'npm install' first"));
}

#[test]
fn test_explicit_logs() {
    let project = Project::new();
    let ctx = HookContext::with_logs(
        &Config::default(),
        project.path().to_path_buf(),
        Overrides::default(),
        Logs::default(),
    )
    .unwrap();

    assert_eq!(hooks::dispatch(Hook::ProtectFiles, "{", &ctx), Outcome::proceed());
    assert!(!project.log("hooks.log").exists());
}
