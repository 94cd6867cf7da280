//! hookguard - Policy hooks for AI coding assistants
//!
//! # Usage
//!
//! ```bash
//! # As a hook (reads the JSON payload from stdin, exit 2 blocks)
//! echo '{"tool_input":{"file_path":".env"}}' | hookguard protect-files
//!
//! # Dry-run mode (report what would be blocked, never block)
//! hookguard security-check --dry-run
//! ```

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use hookguard::{
    audit::Logs,
    config::{Config, Overrides},
    hooks::{self, Hook, HookContext},
    logging,
};

/// Print version information
fn print_version() {
    println!("hookguard {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help(out: &mut impl Write) {
    let mut hook_list = String::new();
    for hook in Hook::ALL {
        hook_list.push_str(&format!("    {:<22}{}\n", hook.name(), hook.description()));
    }

    let _ = write!(
        out,
        r#"hookguard - Policy hooks for AI coding assistants

USAGE:
    hookguard <HOOK> [OPTIONS]

HOOKS:
{hook_list}
OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -d, --dry-run           Report what would be blocked but allow
    -c, --config PATH       Path to config file

ENVIRONMENT:
    CLAUDE_PROJECT_DIR         Project root (default: current directory)
    HOOKGUARD_DISABLED=1       Disable all policy checks
    HOOKGUARD_WARN_ONLY=1      Warn but don't block
    HOOKGUARD_TRACE=PATH       Write diagnostic traces to PATH
    HOOKGUARD_TRACE_LEVEL      Trace filter (default: info)

USAGE AS HOOK:
    Configure in .claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "matcher": "Edit|Write",
          "hooks": [{{ "type": "command", "command": "hookguard protect-files" }}]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    dry_run: bool,
    config_path: Option<String>,
    hook: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            dry_run: false,
            config_path: None,
            hook: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-d" | "--dry-run" => result.dry_run = true,
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--config=") => {
                    let path = arg.trim_start_matches("--config=");
                    result.config_path = Some(path.to_string());
                }
                arg if !arg.starts_with('-') && result.hook.is_none() => {
                    result.hook = Some(arg.to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

fn project_dir() -> PathBuf {
    env::var_os("CLAUDE_PROJECT_DIR")
        .map(PathBuf::from)
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help(&mut io::stdout());
        return;
    }

    if args.version {
        print_version();
        return;
    }

    // Unknown or missing hook: never block the host over a bad registration
    let Some(hook) = args.hook.as_deref().and_then(Hook::from_name) else {
        if let Some(ref name) = args.hook {
            eprintln!("hookguard: unknown hook '{}'\n", name);
        }
        print_help(&mut io::stderr());
        return;
    };

    logging::init_tracing();
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "hook panicked");
    }));

    let project_dir = project_dir();

    let (config, config_error) = match args.config_path {
        Some(ref path) => match Config::load_from(&Config::expand_path(path)) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        },
        None => Config::load(&project_dir),
    };

    let mut overrides = Overrides::from_env();
    if args.dry_run {
        overrides.warn_only = true;
    }

    let logs = Logs::in_dir(&config.log_dir(&project_dir), config.general.audit_log);
    if let Some(ref e) = config_error {
        // Defaults stand in for an unreadable config
        logs.hooks.hook_error(hook.name(), &format!("ERROR: {}: {}", e.kind(), e));
    }

    tracing::info!(hook = hook.name(), project = %project_dir.display(), "hook started");

    let ctx = match HookContext::with_logs(&config, project_dir, overrides, logs.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            hooks::fail_open(hook, &logs, &e);
            return;
        }
    };

    let outcome = hooks::run(hook, io::stdin().lock(), &ctx);
    tracing::info!(hook = hook.name(), exit_code = outcome.exit_code, "hook finished");

    let _ = outcome.emit(&mut io::stdout().lock(), &mut io::stderr().lock());
    process::exit(outcome.exit_code);
}
