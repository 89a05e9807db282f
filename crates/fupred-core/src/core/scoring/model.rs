use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Added to every contact count so that an interval without contacts never
/// divides by zero.
pub const PSEUDO_COUNT: f64 = 1.0;

/// Real (pseudo-count free) contact counts around a single split position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleBoundaryCounts {
    /// Contacts with both ends left of the split.
    pub left: u32,
    /// Contacts with both ends right of the split.
    pub right: u32,
    /// Contacts crossing the split.
    pub crossing: u32,
}

impl SingleBoundaryCounts {
    #[inline]
    pub fn score(&self) -> f64 {
        let n1 = PSEUDO_COUNT + self.left as f64;
        let n2 = PSEUDO_COUNT + self.right as f64;
        let n12 = PSEUDO_COUNT + self.crossing as f64;
        2.0 * n12 * (1.0 / n1 + 1.0 / n2)
    }

    /// Both domains keep at least one real contact.
    #[inline]
    pub fn is_selectable(&self) -> bool {
        self.left > 0 && self.right > 0
    }
}

/// Real contact counts for a split into left `[0,pos1)`, middle
/// `[pos1,pos2)` and right `[pos2,L)`, where left and right form one
/// discontinuous domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleBoundaryCounts {
    pub left: u32,
    pub right: u32,
    pub middle: u32,
    /// Left to right, bypassing the middle.
    pub left_right: u32,
    pub left_middle: u32,
    pub middle_right: u32,
}

impl DoubleBoundaryCounts {
    /// Every domain keeps a real contact, including one bridging the two
    /// halves of the outer domain.
    #[inline]
    pub fn is_selectable(&self) -> bool {
        self.left > 0 && self.right > 0 && self.middle > 0 && self.left_right > 0
    }
}

/// Variant of the double-boundary formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringModel {
    /// `2(Nn2+N2c)(1/(Nn+Nc+2Nnc) + 1/N2)`
    #[default]
    Protein,
    /// `2(Nn2+N2c)(1/(Nn+Nc) + 1/(2Nnc) + 1/N2)`
    Rna,
}

impl ScoringModel {
    pub fn double_boundary_score(&self, counts: &DoubleBoundaryCounts) -> f64 {
        let nn = PSEUDO_COUNT + counts.left as f64;
        let nc = PSEUDO_COUNT + counts.right as f64;
        let n2 = PSEUDO_COUNT + counts.middle as f64;
        let nnc = PSEUDO_COUNT + counts.left_right as f64;
        let nn2 = PSEUDO_COUNT + counts.left_middle as f64;
        let n2c = PSEUDO_COUNT + counts.middle_right as f64;
        match self {
            ScoringModel::Protein => 2.0 * (nn2 + n2c) * (1.0 / (nn + nc + 2.0 * nnc) + 1.0 / n2),
            ScoringModel::Rna => {
                2.0 * (nn2 + n2c) * (1.0 / (nn + nc) + 1.0 / (2.0 * nnc) + 1.0 / n2)
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown scoring model '{0}'. Expected 'protein' or 'rna'.")]
pub struct ParseScoringModelError(pub String);

impl FromStr for ScoringModel {
    type Err = ParseScoringModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "protein" => Ok(ScoringModel::Protein),
            "rna" => Ok(ScoringModel::Rna),
            _ => Err(ParseScoringModelError(s.to_string())),
        }
    }
}

impl fmt::Display for ScoringModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ScoringModel::Protein => "protein",
                ScoringModel::Rna => "rna",
            }
        )
    }
}
