use super::counts::ContactCounts;
use super::model::SingleBoundaryCounts;

/// Single-boundary FU scores for every split position of a chain.
///
/// A split at `pos` separates `[0, pos)` from `[pos, L)`. Position 0 is
/// degenerate and copies position 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreField1D {
    scores: Vec<f64>,
    selectable: Vec<bool>,
}

impl ScoreField1D {
    pub fn compute(counts: &ContactCounts) -> Self {
        let length = counts.len();
        let mut scores = vec![0.0; length];
        let mut selectable = vec![false; length];

        for pos in 1..length {
            let split = Self::counts_at(counts, pos);
            scores[pos] = split.score();
            selectable[pos] = split.is_selectable();
        }
        if length > 1 {
            scores[0] = scores[1];
        }

        Self { scores, selectable }
    }

    /// Real contact counts for a split at `pos` (`1 <= pos < L`).
    pub fn counts_at(counts: &ContactCounts, pos: usize) -> SingleBoundaryCounts {
        let length = counts.len();
        SingleBoundaryCounts {
            left: counts.count(0..pos, 0..pos),
            right: counts.count(pos..length, pos..length),
            crossing: counts.count(0..pos, pos..length),
        }
    }

    /// Assembles a field from precomputed values.
    ///
    /// # Panics
    ///
    /// Panics if the two vectors differ in length.
    pub fn from_parts(scores: Vec<f64>, selectable: Vec<bool>) -> Self {
        assert_eq!(
            scores.len(),
            selectable.len(),
            "score and selectable vectors must have the same length"
        );
        Self { scores, selectable }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[inline]
    pub fn score(&self, pos: usize) -> f64 {
        self.scores[pos]
    }

    #[inline]
    pub fn is_selectable(&self, pos: usize) -> bool {
        self.selectable[pos]
    }
}
