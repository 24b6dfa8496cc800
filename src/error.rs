use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal failures that stop the game before or while it runs.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("could not open log file {path}: {source}")]
    LogFile { path: String, source: io::Error },
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
