use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Chain of length {length} exceeds the maximum of {max} positions")]
    ChainTooLong { length: usize, max: usize },
}
