use fupred::engine::config::PredictionConfig;
use std::path::PathBuf;

/// Where a stream is read from or written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamTarget {
    /// Standard input for the CT, standard output for the report.
    Stdio,
    Path(PathBuf),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: StreamTarget,
    pub output: StreamTarget,
    pub show_progress: bool,
    pub core_config: PredictionConfig,
}
