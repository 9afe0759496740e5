//! Application errors

use battle_core::{BattleError, ConfigError, LoadError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path}: {source}")]
    Load { path: PathBuf, source: LoadError },
    #[error("Invalid rules: {0}")]
    Config(#[from] ConfigError),
    #[error("Cannot start battle: {0}")]
    Battle(#[from] BattleError),
    #[error("Failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}
