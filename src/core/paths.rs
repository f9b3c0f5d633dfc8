//! Locations of the files handflap reads and writes under `~/.handflap/`.

use crate::core::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, LOG_FILE_NAME};
use crate::core::error::{GameError, Result};
use std::fs;
use std::path::PathBuf;

/// Get the ~/.handflap/ directory path, creating it if needed.
pub fn app_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(GameError::HomeDirUnavailable)?;
    let dir = home_dir.join(APP_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default location of the JSON session config.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(app_dir()?.join(CONFIG_FILE_NAME))
}

/// Location of the log file. The terminal belongs to the renderer, so logs go here.
pub fn log_path() -> Result<PathBuf> {
    Ok(app_dir()?.join(LOG_FILE_NAME))
}
