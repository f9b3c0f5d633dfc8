//! Tracing subscriber setup.
//!
//! The interactive binary owns the terminal, so its logs go to
//! `~/.handflap/handflap.log`. The simulator logs to stderr.

use crate::core::constants::LOG_LEVEL_ENV_VAR;
use crate::core::error::Result;
use crate::core::paths::log_path;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

/// Parse a level name from `HANDFLAP_LOG`, falling back to `default`.
pub fn level_from_env(default: Level) -> Level {
    std::env::var(LOG_LEVEL_ENV_VAR)
        .ok()
        .and_then(|value| Level::from_str(value.trim()).ok())
        .unwrap_or(default)
}

/// Append logs to the handflap log file. Returns the file path.
pub fn init_file_logging() -> Result<PathBuf> {
    let path = log_path()?;
    init_file_logging_at(&path)?;
    Ok(path)
}

/// Append logs to `path`. Nothing is installed if the file cannot be opened.
pub fn init_file_logging_at(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    // A second init (tests, restarts) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_from_env(Level::INFO))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// Log to stderr, for headless tools.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_from_env(Level::WARN))
        .with_writer(std::io::stderr)
        .try_init();
}
