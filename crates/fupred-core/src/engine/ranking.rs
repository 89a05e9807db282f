use super::config::RankingConfig;
use crate::core::models::candidate::{Candidate, Plateau};
use tracing::debug;

/// Orders candidates by score and applies the reporting cut-off.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    config: RankingConfig,
}

impl Ranker {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Sorts ascending by score, keeping emission order among ties, then
    /// reports the first `min_reported` candidates unconditionally and
    /// continues only while scores stay below the reliability threshold.
    pub fn rank(&self, mut candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates.sort_by(|a, b| a.score().total_cmp(&b.score()));

        let mut reported = Vec::new();
        let mut claimed: Vec<Plateau> = Vec::new();
        for candidate in candidates {
            let plateaus = candidate.plateaus();
            if self.config.exclusive_boundaries
                && plateaus
                    .iter()
                    .any(|p| claimed.iter().any(|c| c.overlaps(p)))
            {
                continue;
            }
            if reported.len() >= self.config.min_reported
                && candidate.score() >= self.config.reliability_threshold
            {
                break;
            }
            if self.config.exclusive_boundaries {
                claimed.extend(plateaus);
            }
            reported.push(candidate);
        }

        debug!(reported = reported.len(), "Ranking finished.");
        reported
    }
}
