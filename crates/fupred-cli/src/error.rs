use fupred::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Prediction failed: {0}")]
    Engine(#[from] EngineError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Cannot load config file '{path}': {source}", path = path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The contact table could not be opened or is not valid CT.
    #[error("Cannot read contact table '{path}': {source}", path = path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Cannot write FU report to '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Cannot install logger: {0}")]
    Logging(String),
}
