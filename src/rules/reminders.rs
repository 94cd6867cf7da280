//! Security reminders for risky edits
//!
//! Reminders never block. They point at APIs and files where injection bugs
//! tend to creep in.

use crate::rules::ReminderRule;

/// Built-in reminder rules
pub const REMINDER_RULES: &[ReminderRule] = &[
    ReminderRule::path(
        "github_actions_workflow",
        &[".github/workflows/"],
        &[".yml", ".yaml"],
        "You are editing a GitHub Actions workflow file. \
         Avoid command injection by never passing untrusted inputs \
         directly into `run:`. Prefer `env:` with quoting, and review:\n\
         https://github.blog/security/vulnerability-research/\
         how-to-catch-github-actions-workflow-injections-before-attackers-do/\n\
         Risky inputs include issue/PR titles, bodies, comments, and commit messages.",
    ),
    ReminderRule::content(
        "child_process_exec",
        &["child_process.exec(", "execSync("],
        "Security Warning: `child_process.exec()` can lead to command injection. \
         Prefer `execFile` with arguments or a hardened wrapper.",
    ),
    ReminderRule::content(
        "new_function_injection",
        &["new Function"],
        "Security Warning: `new Function()` evaluates dynamic code and risks injection. \
         Prefer safer, non-eval alternatives.",
    ),
    ReminderRule::content(
        "eval_injection",
        &["eval("],
        "Security Warning: `eval()` executes arbitrary code. \
         Prefer safe parsers (e.g., JSON.parse) or alternative designs.",
    ),
    ReminderRule::content(
        "react_dangerously_set_html",
        &["dangerouslySetInnerHTML"],
        "Security Warning: `dangerouslySetInnerHTML` can cause XSS. \
         Sanitize untrusted HTML (e.g., DOMPurify) or use safe rendering.",
    ),
    ReminderRule::content(
        "document_write_xss",
        &["document.write"],
        "Security Warning: `document.write()` can be exploited for XSS. \
         Use safe DOM APIs instead.",
    ),
    ReminderRule::content(
        "innerHTML_xss",
        &[".innerHTML =", ".innerHTML="],
        "Security Warning: setting `innerHTML` with untrusted content can cause XSS. \
         Use `textContent` or sanitize HTML.",
    ),
    ReminderRule::content(
        "os_system_injection",
        &["os.system(", "from os import system"],
        "Security Warning: `os.system()` is unsafe with untrusted input. \
         Prefer subprocess with explicit arguments.",
    ),
];

/// Look up a reminder rule by name
pub fn rule_by_name(name: &str) -> Option<&'static ReminderRule> {
    REMINDER_RULES.iter().find(|r| r.name == name)
}
