use crate::error::{CliError, Result};
use fupred::core::scoring::model::ScoringModel;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileScoringConfig {
    pub model: Option<ScoringModel>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileSearchConfig {
    pub discontinuous: Option<bool>,
    pub min_insert_span: Option<usize>,
    pub max_chain_length: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileRankingConfig {
    pub min_reported: Option<usize>,
    pub reliability_threshold: Option<f64>,
    pub exclusive_boundaries: Option<bool>,
}

/// The `--config` TOML file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub scoring: Option<FileScoringConfig>,
    pub search: Option<FileSearchConfig>,
    pub ranking: Option<FileRankingConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(content: &str) -> std::result::Result<FileConfig, toml::de::Error> {
        toml::from_str(content)
    }

    #[test]
    fn full_file_is_parsed() {
        let config = parse(
            r#"
            [scoring]
            model = "rna"

            [search]
            discontinuous = false
            min-insert-span = 4
            max-chain-length = 800

            [ranking]
            min-reported = 5
            reliability-threshold = 0.8
            exclusive-boundaries = true
            "#,
        )
        .unwrap();

        assert_eq!(
            config.scoring.unwrap().model,
            Some(ScoringModel::Rna)
        );
        let search = config.search.unwrap();
        assert_eq!(search.discontinuous, Some(false));
        assert_eq!(search.min_insert_span, Some(4));
        assert_eq!(search.max_chain_length, Some(800));
        let ranking = config.ranking.unwrap();
        assert_eq!(ranking.min_reported, Some(5));
        assert_eq!(ranking.reliability_threshold, Some(0.8));
        assert_eq!(ranking.exclusive_boundaries, Some(true));
    }

    #[test]
    fn empty_file_leaves_everything_unset() {
        assert_eq!(parse("").unwrap(), FileConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse("[search]\nmin-span = 2\n").is_err());
        assert!(parse("[output]\nformat = \"tsv\"\n").is_err());
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[scoring]\nmodel = \"dna\"\n").unwrap();

        match FileConfig::from_file(&path) {
            Err(CliError::ConfigFile { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a file parsing error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::ConfigFile { .. })));
    }
}
