//! Diagnostic logging via `tracing`.
//!
//! The TUI owns the terminal, so diagnostics go to a file named on the
//! command line. One-shot commands may log to stderr instead.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "WORKBENCH_LOG";
const DEFAULT_DIRECTIVE: &str = "workbench=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Append diagnostics to `path`.
pub fn init_file_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| format!("cannot open log file {}: {err}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| format!("failed to initialize logging: {err}"))?;
    Ok(())
}

/// Log to stderr, but only when [`LOG_ENV`] is set.
pub fn init_stderr_logging_from_env() {
    if std::env::var_os(LOG_ENV).is_none() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
