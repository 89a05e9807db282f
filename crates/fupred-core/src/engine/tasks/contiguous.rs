use crate::core::models::candidate::{Candidate, Plateau};
use crate::core::scoring::field1d::ScoreField1D;
use tracing::{debug, trace};

/// Scans the single-boundary field for local minima and emits one
/// contiguous candidate per accepted plateau, in increasing `pos` order.
pub fn run(field: &ScoreField1D) -> Vec<Candidate> {
    let length = field.len();
    let mut candidates = Vec::new();

    for pos in 2..length.saturating_sub(1) {
        let score = field.score(pos);
        if !is_local_minimum(field, pos, score) {
            continue;
        }
        let Some(last) = extend_plateau(field, pos, score) else {
            trace!(pos, "Plateau descends further, rejected.");
            continue;
        };
        let plateau = Plateau::new(pos, last);
        if !field.is_selectable(plateau.midpoint()) {
            trace!(pos, mid = plateau.midpoint(), "Midpoint not selectable.");
            continue;
        }
        candidates.push(Candidate::contiguous(score, plateau, length));
    }

    debug!(count = candidates.len(), "Contiguous pass finished.");
    candidates
}

/// Strictly below the previous position, not above the next one, so a
/// plateau is entered only at its first position.
#[inline]
fn is_local_minimum(field: &ScoreField1D, pos: usize, score: f64) -> bool {
    score < field.score(pos - 1) && score <= field.score(pos + 1)
}

/// Last position of the run of scores tied with `score` that starts at
/// `pos`, or `None` if the run is followed by a lower score. A run that
/// reaches the end of the chain ends at `L - 1`.
fn extend_plateau(field: &ScoreField1D, pos: usize, score: f64) -> Option<usize> {
    let last = field.len() - 1;
    for resi in pos..last {
        let next = field.score(resi + 1);
        if score > next {
            return None;
        }
        if score < next {
            return Some(resi);
        }
    }
    Some(last)
}
