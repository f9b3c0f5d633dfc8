//! Error type shared by configuration loading and session construction.
//!
//! The simulation itself never fails: collisions, missing frames and
//! missing hands are ordinary states, not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("could not parse configuration file: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("could not determine home directory")]
    HomeDirUnavailable,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
