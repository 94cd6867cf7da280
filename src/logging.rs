//! Diagnostic tracing setup
//!
//! stdout and stderr carry the hook protocol, so traces only ever go to a
//! file: the one named by `HOOKGUARD_TRACE`. Without it no subscriber is
//! installed and trace events cost nothing.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Variable naming the trace file
pub const TRACE_FILE_ENV: &str = "HOOKGUARD_TRACE";

/// Variable holding the filter directive (EnvFilter syntax)
pub const TRACE_LEVEL_ENV: &str = "HOOKGUARD_TRACE_LEVEL";

/// Install a file subscriber if `HOOKGUARD_TRACE` is set.
///
/// Returns true when tracing was enabled. Any failure leaves tracing off.
pub fn init_tracing() -> bool {
    let Some(path) = std::env::var_os(TRACE_FILE_ENV) else {
        return false;
    };
    let path = Path::new(&path);

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    let filter = EnvFilter::try_from_env(TRACE_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
