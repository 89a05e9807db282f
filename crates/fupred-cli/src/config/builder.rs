use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, StreamTarget};
use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::parser;
use fupred::engine::config::PredictionConfigBuilder;
use std::str::FromStr;

/// Merges built-in defaults, the config file, `--set` values and dedicated
/// flags, in increasing order of precedence.
pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let args = &cli.prediction;

    let input = cli
        .input
        .as_deref()
        .ok_or_else(|| CliError::Usage("an input CT file is required".to_string()))?;
    let input = parser::parse_stream_target(input, "input")
        .map_err(|e| CliError::Usage(e.to_string()))?;
    let output = parser::parse_stream_target(&cli.output, "output")
        .map_err(|e| CliError::Usage(e.to_string()))?;

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let scoring = file_config.scoring.take().unwrap_or_default();
    let search = file_config.search.take().unwrap_or_default();
    let ranking = file_config.ranking.take().unwrap_or_default();

    let model = args.model.or(scoring.model).unwrap_or(defaults.model);
    let discontinuous = if args.no_discontinuous {
        false
    } else {
        search.discontinuous.unwrap_or(defaults.discontinuous)
    };
    let exclusive_boundaries = if args.exclusive {
        true
    } else {
        ranking
            .exclusive_boundaries
            .unwrap_or(defaults.exclusive_boundaries)
    };

    let core_config = PredictionConfigBuilder::new()
        .model(model)
        .discontinuous(discontinuous)
        .min_insert_span(search.min_insert_span.unwrap_or(defaults.min_insert_span))
        .max_chain_length(search.max_chain_length.unwrap_or(defaults.max_chain_length))
        .min_reported(ranking.min_reported.unwrap_or(defaults.min_reported))
        .reliability_threshold(
            ranking
                .reliability_threshold
                .unwrap_or(defaults.reliability_threshold),
        )
        .exclusive_boundaries(exclusive_boundaries)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let show_progress = !args.no_progress && output != StreamTarget::Stdio;

    Ok(AppConfig {
        input,
        output,
        show_progress,
        core_config,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for pair in set_values {
        let (key, value) =
            parser::parse_assignment(pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "scoring.model" => {
                config.scoring.get_or_insert_with(Default::default).model =
                    Some(parse_value(key, value, "model")?);
            }
            "search.discontinuous" => {
                config.search.get_or_insert_with(Default::default).discontinuous =
                    Some(parse_value(key, value, "boolean")?);
            }
            "search.min-insert-span" => {
                config.search.get_or_insert_with(Default::default).min_insert_span =
                    Some(parse_value(key, value, "integer")?);
            }
            "search.max-chain-length" => {
                config.search.get_or_insert_with(Default::default).max_chain_length =
                    Some(parse_value(key, value, "integer")?);
            }
            "ranking.min-reported" => {
                config.ranking.get_or_insert_with(Default::default).min_reported =
                    Some(parse_value(key, value, "integer")?);
            }
            "ranking.reliability-threshold" => {
                config
                    .ranking
                    .get_or_insert_with(Default::default)
                    .reliability_threshold = Some(parse_value(key, value, "float")?);
            }
            "ranking.exclusive-boundaries" => {
                config
                    .ranking
                    .get_or_insert_with(Default::default)
                    .exclusive_boundaries = Some(parse_value(key, value, "boolean")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
