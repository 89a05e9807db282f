use crate::core::scoring::model::ScoringModel;
use thiserror::Error;

pub const DEFAULT_MIN_INSERT_SPAN: usize = 3;
pub const DEFAULT_MAX_CHAIN_LENGTH: usize = 5000;
pub const DEFAULT_MIN_REPORTED: usize = 10;
pub const DEFAULT_RELIABILITY_THRESHOLD: f64 = 1.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoringConfig {
    pub model: ScoringModel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Run the double-boundary pass.
    pub discontinuous: bool,
    /// Smallest `pos2 - pos1` the double-boundary pass considers.
    pub min_insert_span: usize,
    /// Longest chain accepted; both score fields are `L x L`.
    pub max_chain_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            discontinuous: true,
            min_insert_span: DEFAULT_MIN_INSERT_SPAN,
            max_chain_length: DEFAULT_MAX_CHAIN_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingConfig {
    /// Candidates always reported, whatever their score.
    pub min_reported: usize,
    /// Past the quota, reporting stops at the first score at or above this.
    pub reliability_threshold: f64,
    /// Skip candidates whose plateaus overlap an already reported one.
    pub exclusive_boundaries: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_reported: DEFAULT_MIN_REPORTED,
            reliability_threshold: DEFAULT_RELIABILITY_THRESHOLD,
            exclusive_boundaries: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PredictionConfig {
    pub scoring: ScoringConfig,
    pub search: SearchConfig,
    pub ranking: RankingConfig,
}

impl PredictionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.min_insert_span == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "min_insert_span",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.search.max_chain_length == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "max_chain_length",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.ranking.reliability_threshold.is_finite() {
            return Err(ConfigError::InvalidValue {
                parameter: "reliability_threshold",
                reason: format!("must be finite, got {}", self.ranking.reliability_threshold),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct PredictionConfigBuilder {
    model: Option<ScoringModel>,
    discontinuous: Option<bool>,
    min_insert_span: Option<usize>,
    max_chain_length: Option<usize>,
    min_reported: Option<usize>,
    reliability_threshold: Option<f64>,
    exclusive_boundaries: Option<bool>,
}

impl PredictionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: ScoringModel) -> Self {
        self.model = Some(model);
        self
    }
    pub fn discontinuous(mut self, enabled: bool) -> Self {
        self.discontinuous = Some(enabled);
        self
    }
    pub fn min_insert_span(mut self, span: usize) -> Self {
        self.min_insert_span = Some(span);
        self
    }
    pub fn max_chain_length(mut self, length: usize) -> Self {
        self.max_chain_length = Some(length);
        self
    }
    pub fn min_reported(mut self, n: usize) -> Self {
        self.min_reported = Some(n);
        self
    }
    pub fn reliability_threshold(mut self, threshold: f64) -> Self {
        self.reliability_threshold = Some(threshold);
        self
    }
    pub fn exclusive_boundaries(mut self, exclusive: bool) -> Self {
        self.exclusive_boundaries = Some(exclusive);
        self
    }

    /// Builds the configuration, filling unset parameters with defaults.
    pub fn build(self) -> Result<PredictionConfig, ConfigError> {
        let search_defaults = SearchConfig::default();
        let ranking_defaults = RankingConfig::default();
        let config = PredictionConfig {
            scoring: ScoringConfig {
                model: self.model.unwrap_or_default(),
            },
            search: SearchConfig {
                discontinuous: self.discontinuous.unwrap_or(search_defaults.discontinuous),
                min_insert_span: self
                    .min_insert_span
                    .unwrap_or(search_defaults.min_insert_span),
                max_chain_length: self
                    .max_chain_length
                    .unwrap_or(search_defaults.max_chain_length),
            },
            ranking: RankingConfig {
                min_reported: self.min_reported.unwrap_or(ranking_defaults.min_reported),
                reliability_threshold: self
                    .reliability_threshold
                    .unwrap_or(ranking_defaults.reliability_threshold),
                exclusive_boundaries: self
                    .exclusive_boundaries
                    .unwrap_or(ranking_defaults.exclusive_boundaries),
            },
        };
        config.validate()?;
        Ok(config)
    }
}
