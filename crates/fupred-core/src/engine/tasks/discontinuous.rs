use crate::core::models::candidate::{Candidate, Plateau};
use crate::core::scoring::field1d::ScoreField1D;
use crate::core::scoring::field2d::ScoreField2D;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, trace};

/// Read-only view over both score fields for the double-boundary search.
struct Surface<'a> {
    line: &'a ScoreField1D,
    plane: &'a ScoreField2D,
}

impl Surface<'_> {
    #[inline]
    fn s1(&self, pos: usize) -> f64 {
        self.line.score(pos)
    }

    #[inline]
    fn s2(&self, pos1: usize, pos2: usize) -> f64 {
        self.plane.score(pos1, pos2)
    }

    fn len(&self) -> usize {
        self.line.len()
    }

    /// Below both single-boundary scores and a minimum of the 8-neighbourhood.
    /// Earlier neighbours must be strictly higher and later ones not lower,
    /// so a tied plateau is entered only at its earliest corner.
    fn is_local_minimum(&self, pos1: usize, pos2: usize, score: f64) -> bool {
        score < self.s1(pos1)
            && score < self.s1(pos2)
            && score < self.s2(pos1 - 1, pos2 - 1)
            && score < self.s2(pos1 - 1, pos2)
            && score < self.s2(pos1, pos2 - 1)
            && score <= self.s2(pos1 + 1, pos2)
            && score <= self.s2(pos1, pos2 + 1)
            && score <= self.s2(pos1 + 1, pos2 + 1)
    }

    /// Extends the N-terminal boundary from `pos1` along the first axis
    /// while the score stays tied, holding `pos2` fixed.
    fn extend_first_axis(&self, pos1: usize, pos2: usize, score: f64) -> Option<Plateau> {
        for resi in pos1..pos2 {
            let next = self.s2(resi + 1, pos2);
            if score >= self.s1(resi) || score > next {
                return None;
            }
            if score < next {
                return Some(Plateau::new(pos1, resi));
            }
        }
        None
    }

    /// Extends the C-terminal boundary from `pos2` along the second axis,
    /// holding the first axis at the end of its plateau. A plateau touching
    /// the chain end has no outer edge to confirm and is rejected.
    fn extend_second_axis(&self, last_n: usize, pos2: usize, score: f64) -> Option<Plateau> {
        for resi in pos2..self.len() - 1 {
            let next = self.s2(last_n, resi + 1);
            if score >= self.s1(resi) || score > next {
                return None;
            }
            if score < next {
                return Some(Plateau::new(pos2, resi));
            }
        }
        None
    }

    /// The three outward corners of the plateau block are all higher.
    fn is_basin(&self, n: Plateau, c: Plateau, score: f64) -> bool {
        score < self.s2(n.first() - 1, c.last() + 1)
            && score < self.s2(n.last() + 1, c.first() - 1)
            && score < self.s2(n.last() + 1, c.last() + 1)
    }

    /// Some row of the block is walled in on both column sides and some
    /// column on both row sides.
    fn is_basin_confirmed(&self, n: Plateau, c: Plateau, score: f64) -> bool {
        let row_walled = n.positions().any(|i| {
            self.s2(i, c.first() - 1) >= score && self.s2(i, c.last() + 1) >= score
        });
        let column_walled = c.positions().any(|j| {
            self.s2(n.first() - 1, j) >= score && self.s2(n.last() + 1, j) >= score
        });
        row_walled && column_walled
    }

    fn evaluate(&self, pos1: usize, pos2: usize) -> Option<Candidate> {
        let score = self.s2(pos1, pos2);
        if !self.is_local_minimum(pos1, pos2, score) {
            return None;
        }
        let n = self.extend_first_axis(pos1, pos2, score)?;
        let c = self.extend_second_axis(n.last(), pos2, score)?;
        if !self.is_basin(n, c, score) || !self.is_basin_confirmed(n, c, score) {
            trace!(pos1, pos2, "Plateau is not a basin.");
            return None;
        }
        if !self.plane.is_selectable(n.midpoint(), c.midpoint()) {
            trace!(pos1, pos2, "Midpoints not selectable.");
            return None;
        }
        Some(Candidate::discontinuous(score, n, c, self.len()))
    }
}

/// Scans the double-boundary field for basins and emits discontinuous
/// candidates ordered by `pos1`, then `pos2`.
///
/// `min_insert_span` is the smallest `pos2 - pos1` examined.
pub fn run(
    line: &ScoreField1D,
    plane: &ScoreField2D,
    min_insert_span: usize,
    reporter: &ProgressReporter,
) -> Vec<Candidate> {
    let surface = Surface { line, plane };
    let end = surface.len().saturating_sub(1);
    let mut candidates = Vec::new();

    let rows = end.saturating_sub(2);
    reporter.report(Progress::TaskStart {
        total_steps: rows as u64,
    });
    for pos1 in 2..end {
        for pos2 in pos1.saturating_add(min_insert_span)..end {
            if let Some(candidate) = surface.evaluate(pos1, pos2) {
                candidates.push(candidate);
            }
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    debug!(count = candidates.len(), "Discontinuous pass finished.");
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::contact::ContactSet;
    use crate::core::scoring::counts::ContactCounts;
    use crate::core::scoring::model::ScoringModel;
    use std::sync::{Arc, Mutex};

    fn fields(set: &ContactSet, model: ScoringModel) -> (ScoreField1D, ScoreField2D) {
        let counts = ContactCounts::new(set);
        let line = ScoreField1D::compute(&counts);
        let plane = ScoreField2D::compute(&counts, &line, model);
        (line, plane)
    }

    fn inserted_with_linkers() -> ContactSet {
        // Outer domain 0..=3 + 14..=17, inserted domain 6..=11, unpaired
        // linkers 4..=5 and 12..=13.
        ContactSet::new(
            18,
            vec![(0, 17), (1, 16), (0, 3), (14, 17), (6, 11), (7, 10), (8, 9)],
        )
    }

    #[test]
    fn inserted_domain_is_found_between_linkers() {
        let (line, plane) = fields(&inserted_with_linkers(), ScoringModel::Protein);
        let candidates = run(&line, &plane, 3, &ProgressReporter::new());

        assert_eq!(candidates.len(), 1);
        let candidate = &candidates[0];
        assert!((candidate.score() - 1.4).abs() < 1e-9);
        assert_eq!(
            candidate.plateaus(),
            vec![Plateau::new(4, 6), Plateau::new(12, 14)]
        );
        assert_eq!(candidate.partition_label(), "(1-5,14-18)(6-13)");
        assert_eq!(candidate.linker_label(), "(1-4,15-18)5-6,13-14(7-12)");
    }

    #[test]
    fn rna_model_finds_same_boundaries_with_its_own_score() {
        let (line, plane) = fields(&inserted_with_linkers(), ScoringModel::Rna);
        let candidates = run(&line, &plane, 3, &ProgressReporter::new());
        assert_eq!(candidates.len(), 1);
        assert!((candidates[0].score() - 8.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn emitted_midpoints_are_selectable() {
        let set = ContactSet::new(
            16,
            vec![(0, 15), (1, 14), (2, 3), (12, 13), (4, 11), (5, 10), (6, 9), (7, 8)],
        );
        let (line, plane) = fields(&set, ScoringModel::Protein);
        let candidates = run(&line, &plane, 3, &ProgressReporter::new());
        assert_eq!(candidates.len(), 1);
        for candidate in &candidates {
            let mids = candidate.midpoints();
            assert!(plane.is_selectable(mids[0], mids[1]));
        }
        assert_eq!(candidates[0].partition_label(), "(1-4,13-16)(5-12)");
    }

    #[test]
    fn wider_insert_span_skips_narrow_pairs() {
        let (line, plane) = fields(&inserted_with_linkers(), ScoringModel::Protein);
        assert!(run(&line, &plane, 9, &ProgressReporter::new()).is_empty());
    }

    #[test]
    fn tied_earlier_neighbour_blocks_local_minimum() {
        let length = 8;
        let line = ScoreField1D::from_parts(vec![9.0; length], vec![true; length]);
        let mut scores = vec![5.0; length * length];
        let mut set = |a: usize, b: usize, v: f64| {
            scores[a * length + b] = v;
            scores[b * length + a] = v;
        };
        set(2, 5, 1.0);
        set(1, 4, 1.0);
        let plane = ScoreField2D::from_parts(length, scores, vec![true; length * length]);
        let surface = Surface {
            line: &line,
            plane: &plane,
        };
        assert!(!surface.is_local_minimum(2, 5, 1.0));
        assert!(surface.is_local_minimum(1, 4, 1.0));
    }

    #[test]
    fn tied_later_neighbour_extends_plateau() {
        let length = 10;
        let line = ScoreField1D::from_parts(vec![9.0; length], vec![true; length]);
        let mut scores = vec![5.0; length * length];
        for (a, b) in [(2, 6), (3, 6)] {
            scores[a * length + b] = 1.0;
            scores[b * length + a] = 1.0;
        }
        let plane = ScoreField2D::from_parts(length, scores, vec![true; length * length]);
        let candidates = run(&line, &plane, 3, &ProgressReporter::new());

        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].plateaus(),
            vec![Plateau::new(2, 3), Plateau::new(6, 6)]
        );
    }

    #[test]
    fn basin_without_walled_row_is_rejected() {
        // Plateau block rows 2..=3 x columns 6..=7. Row 2 leaks at column 8
        // and row 3 at column 5, while the corners stay higher.
        let length = 12;
        let line = ScoreField1D::from_parts(vec![9.0; length], vec![true; length]);
        let mut scores = vec![5.0; length * length];
        let mut set = |a: usize, b: usize, v: f64| {
            scores[a * length + b] = v;
            scores[b * length + a] = v;
        };
        set(2, 6, 1.0);
        set(3, 6, 1.0);
        set(3, 7, 1.0);
        set(2, 8, 0.5);
        set(3, 5, 0.5);
        let plane = ScoreField2D::from_parts(length, scores, vec![true; length * length]);
        let surface = Surface {
            line: &line,
            plane: &plane,
        };

        assert!(surface.is_local_minimum(2, 6, 1.0));
        let n = surface.extend_first_axis(2, 6, 1.0).unwrap();
        let c = surface.extend_second_axis(n.last(), 6, 1.0).unwrap();
        assert_eq!((n, c), (Plateau::new(2, 3), Plateau::new(6, 7)));
        assert!(surface.is_basin(n, c, 1.0));
        assert!(!surface.is_basin_confirmed(n, c, 1.0));
        assert!(surface.evaluate(2, 6).is_none());

        let candidates = run(&line, &plane, 3, &ProgressReporter::new());
        let found: Vec<Vec<usize>> = candidates.iter().map(Candidate::midpoints).collect();
        assert_eq!(found, vec![vec![2, 8]]);
    }

    #[test]
    fn walled_row_and_column_confirm_the_basin() {
        let length = 12;
        let line = ScoreField1D::from_parts(vec![9.0; length], vec![true; length]);
        let mut scores = vec![5.0; length * length];
        for (a, b) in [(2, 6), (3, 6), (3, 7)] {
            scores[a * length + b] = 1.0;
            scores[b * length + a] = 1.0;
        }
        let plane = ScoreField2D::from_parts(length, scores, vec![true; length * length]);
        let candidates = run(&line, &plane, 3, &ProgressReporter::new());

        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].plateaus(),
            vec![Plateau::new(2, 3), Plateau::new(6, 7)]
        );
    }

    #[test]
    fn huge_insert_span_does_not_wrap_around() {
        let (line, plane) = fields(&inserted_with_linkers(), ScoringModel::Protein);
        assert!(run(&line, &plane, usize::MAX, &ProgressReporter::new()).is_empty());
        assert!(run(&line, &plane, usize::MAX - 1, &ProgressReporter::new()).is_empty());
    }

    #[test]
    fn plateau_reaching_chain_end_is_rejected() {
        let length = 8;
        let line = ScoreField1D::from_parts(vec![9.0; length], vec![true; length]);
        let mut scores = vec![5.0; length * length];
        for b in 5..length {
            scores[2 * length + b] = 1.0;
            scores[b * length + 2] = 1.0;
        }
        let plane = ScoreField2D::from_parts(length, scores, vec![true; length * length]);
        assert!(run(&line, &plane, 3, &ProgressReporter::new()).is_empty());
    }

    #[test]
    fn progress_reports_one_increment_per_row() {
        let (line, plane) = fields(&inserted_with_linkers(), ScoringModel::Protein);
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |e| {
            sink.lock().unwrap().push(e);
        }));
        run(&line, &plane, 3, &reporter);

        let events = events.lock().unwrap();
        assert_eq!(events.first(), Some(&Progress::TaskStart { total_steps: 15 }));
        assert_eq!(events.last(), Some(&Progress::TaskFinish));
        let increments = events
            .iter()
            .filter(|e| **e == Progress::TaskIncrement)
            .count();
        assert_eq!(increments, 15);
    }

    #[test]
    fn short_chains_yield_nothing() {
        for length in 0..=4 {
            let set = ContactSet::new(length, Vec::new());
            let (line, plane) = fields(&set, ScoringModel::Protein);
            assert!(run(&line, &plane, 3, &ProgressReporter::new()).is_empty());
        }
    }
}
