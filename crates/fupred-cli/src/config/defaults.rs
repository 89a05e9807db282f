use fupred::core::scoring::model::ScoringModel;
use fupred::engine::config::{
    DEFAULT_MAX_CHAIN_LENGTH, DEFAULT_MIN_INSERT_SPAN, DEFAULT_MIN_REPORTED,
    DEFAULT_RELIABILITY_THRESHOLD,
};

pub struct DefaultsConfig {
    pub model: ScoringModel,
    pub discontinuous: bool,
    pub min_insert_span: usize,
    pub max_chain_length: usize,
    pub min_reported: usize,
    pub reliability_threshold: f64,
    pub exclusive_boundaries: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            model: ScoringModel::Protein,
            discontinuous: true,
            min_insert_span: DEFAULT_MIN_INSERT_SPAN,
            max_chain_length: DEFAULT_MAX_CHAIN_LENGTH,
            min_reported: DEFAULT_MIN_REPORTED,
            reliability_threshold: DEFAULT_RELIABILITY_THRESHOLD,
            exclusive_boundaries: false,
        }
    }
}
