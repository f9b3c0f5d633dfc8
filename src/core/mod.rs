//! Session configuration, errors, logging and build metadata.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod paths;

pub use config::SessionConfig;
pub use constants::*;
pub use error::{GameError, Result};
