use crate::core::models::candidate::Candidate;
use crate::core::models::contact::ContactSet;
use crate::core::scoring::counts::ContactCounts;
use crate::core::scoring::field1d::ScoreField1D;
use crate::core::scoring::field2d::ScoreField2D;
use crate::engine::config::PredictionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Phase, Progress, ProgressReporter};
use crate::engine::ranking::Ranker;
use crate::engine::tasks;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub chain_length: usize,
    pub num_contacts: usize,
    /// Candidates emitted by the search passes before ranking.
    pub candidates_considered: usize,
    /// Reported candidates, ascending by score.
    pub candidates: Vec<Candidate>,
}

/// Scores every boundary of `contacts` and returns the ranked candidates.
///
/// The run is deterministic: the same contact set and configuration always
/// produce the same candidates in the same order.
#[instrument(skip_all, name = "prediction_workflow")]
pub fn run(
    contacts: &ContactSet,
    config: &PredictionConfig,
    reporter: &ProgressReporter,
) -> Result<PredictionResult, EngineError> {
    config.validate()?;
    let length = contacts.len();
    if length > config.search.max_chain_length {
        return Err(EngineError::ChainTooLong {
            length,
            max: config.search.max_chain_length,
        });
    }
    info!(
        length,
        contacts = contacts.num_contacts(),
        model = %config.scoring.model,
        "Starting folding-unit prediction."
    );

    let counts = reporter.phase(Phase::ContactCounting, || ContactCounts::new(contacts));
    let line = reporter.phase(Phase::SingleBoundaryScoring, || {
        ScoreField1D::compute(&counts)
    });

    let plane = if config.search.discontinuous {
        Some(reporter.phase(Phase::DoubleBoundaryScoring, || {
            reporter.report(Progress::TaskStart {
                total_steps: length.saturating_sub(1) as u64,
            });
            let plane = ScoreField2D::compute_with_progress(
                &counts,
                &line,
                config.scoring.model,
                |_| reporter.report(Progress::TaskIncrement),
            );
            reporter.report(Progress::TaskFinish);
            plane
        }))
    } else {
        debug!("Double-boundary scoring disabled; skipping discontinuous search.");
        None
    };

    let mut candidates =
        reporter.phase(Phase::ContiguousSearch, || tasks::contiguous::run(&line));
    if let Some(plane) = &plane {
        let discontinuous = reporter.phase(Phase::DiscontinuousSearch, || {
            tasks::discontinuous::run(&line, plane, config.search.min_insert_span, reporter)
        });
        candidates.extend(discontinuous);
    }

    let candidates_considered = candidates.len();
    let ranked = reporter.phase(Phase::Ranking, || {
        let ranked = Ranker::new(config.ranking).rank(candidates);
        reporter.report(Progress::Message(format!(
            "{} of {} candidate(s) reported",
            ranked.len(),
            candidates_considered
        )));
        ranked
    });

    info!(
        considered = candidates_considered,
        reported = ranked.len(),
        "Prediction complete."
    );
    Ok(PredictionResult {
        chain_length: length,
        num_contacts: contacts.num_contacts(),
        candidates_considered,
        candidates: ranked,
    })
}
