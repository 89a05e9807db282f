use super::counts::ContactCounts;
use super::field1d::ScoreField1D;
use super::model::{DoubleBoundaryCounts, ScoringModel};

/// Double-boundary (discontinuous domain) FU scores for every pair of split
/// positions, stored as a dense symmetric `L x L` matrix.
///
/// The diagonal holds the single-boundary scores and row/column 0 mirror
/// row/column 1. Selectable flags are only set on the upper triangle and
/// the diagonal; `(pos1, pos2)` with `pos1 > pos2` is never selectable.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreField2D {
    length: usize,
    scores: Vec<f64>,
    selectable: Vec<bool>,
}

impl ScoreField2D {
    pub fn compute(counts: &ContactCounts, field1d: &ScoreField1D, model: ScoringModel) -> Self {
        Self::compute_with_progress(counts, field1d, model, |_| {})
    }

    /// Like [`compute`](Self::compute), calling `on_row` after each `pos1`
    /// row in `[1, L)` is filled.
    pub fn compute_with_progress<F>(
        counts: &ContactCounts,
        field1d: &ScoreField1D,
        model: ScoringModel,
        mut on_row: F,
    ) -> Self
    where
        F: FnMut(usize),
    {
        let length = counts.len();
        let mut field = Self {
            length,
            scores: vec![0.0; length * length],
            selectable: vec![false; length * length],
        };

        for pos1 in 1..length {
            let diag = field.index(pos1, pos1);
            field.scores[diag] = field1d.score(pos1);
            field.selectable[diag] = field1d.is_selectable(pos1);

            for pos2 in pos1 + 1..length {
                let split = Self::counts_at(counts, pos1, pos2);
                let score = model.double_boundary_score(&split);
                let upper = field.index(pos1, pos2);
                let lower = field.index(pos2, pos1);
                field.scores[upper] = score;
                field.scores[lower] = score;
                field.selectable[upper] = split.is_selectable();
            }

            let mirrored = field.score(pos1, 1);
            let (row, col) = (field.index(pos1, 0), field.index(0, pos1));
            field.scores[row] = mirrored;
            field.scores[col] = mirrored;
            on_row(pos1);
        }
        if length > 1 {
            let corner = field.score(1, 1);
            field.scores[0] = corner;
        }

        field
    }

    /// Real contact counts for the split `[0,pos1) [pos1,pos2) [pos2,L)`
    /// (`1 <= pos1 < pos2 < L`).
    pub fn counts_at(counts: &ContactCounts, pos1: usize, pos2: usize) -> DoubleBoundaryCounts {
        let length = counts.len();
        DoubleBoundaryCounts {
            left: counts.count(0..pos1, 0..pos1),
            right: counts.count(pos2..length, pos2..length),
            middle: counts.count(pos1..pos2, pos1..pos2),
            left_right: counts.count(0..pos1, pos2..length),
            left_middle: counts.count(0..pos1, pos1..pos2),
            middle_right: counts.count(pos1..pos2, pos2..length),
        }
    }

    /// Assembles a field from row-major precomputed values.
    ///
    /// # Panics
    ///
    /// Panics if either vector does not hold `length * length` entries.
    pub fn from_parts(length: usize, scores: Vec<f64>, selectable: Vec<bool>) -> Self {
        assert_eq!(scores.len(), length * length, "scores must be length x length");
        assert_eq!(
            selectable.len(),
            length * length,
            "selectable flags must be length x length"
        );
        Self {
            length,
            scores,
            selectable,
        }
    }

    #[inline]
    fn index(&self, pos1: usize, pos2: usize) -> usize {
        pos1 * self.length + pos2
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn score(&self, pos1: usize, pos2: usize) -> f64 {
        self.scores[self.index(pos1, pos2)]
    }

    #[inline]
    pub fn is_selectable(&self, pos1: usize, pos2: usize) -> bool {
        self.selectable[self.index(pos1, pos2)]
    }
}
