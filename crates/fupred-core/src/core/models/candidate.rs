use std::fmt;
use std::ops::RangeInclusive;

/// Whether a candidate splits the chain into two adjacent domains or inserts
/// one domain inside another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    Contiguous,
    Discontinuous,
}

impl CandidateKind {
    pub fn tag(&self) -> char {
        match self {
            CandidateKind::Contiguous => 'C',
            CandidateKind::Discontinuous => 'D',
        }
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A run of consecutive split positions sharing the same optimal score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plateau {
    first: usize,
    last: usize,
}

impl Plateau {
    pub fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last, "plateau must not be reversed");
        Self { first, last }
    }

    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }

    #[inline]
    pub fn last(&self) -> usize {
        self.last
    }

    /// The split position reported as the domain boundary.
    #[inline]
    pub fn midpoint(&self) -> usize {
        (self.first + self.last) / 2
    }

    pub fn positions(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }

    pub fn overlaps(&self, other: &Plateau) -> bool {
        self.first <= other.last && other.first <= self.last
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// One boundary: `[0, mid)` and `[mid, L)`.
    Contiguous { plateau: Plateau },
    /// Two boundaries: `[0, n) + [c, L)` form the outer domain and `[n, c)`
    /// is inserted inside it, `n` and `c` being the plateau midpoints.
    Discontinuous {
        n_plateau: Plateau,
        c_plateau: Plateau,
    },
}

/// A ranked domain-boundary hypothesis.
///
/// Positions held internally are 0-based split positions; ranges returned by
/// [`domains`](Self::domains) and [`linkers`](Self::linkers) are 1-based and
/// closed, as printed in reports.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    score: f64,
    boundary: Boundary,
    chain_length: usize,
}

impl Candidate {
    pub fn contiguous(score: f64, plateau: Plateau, chain_length: usize) -> Self {
        Self {
            score,
            boundary: Boundary::Contiguous { plateau },
            chain_length,
        }
    }

    pub fn discontinuous(
        score: f64,
        n_plateau: Plateau,
        c_plateau: Plateau,
        chain_length: usize,
    ) -> Self {
        Self {
            score,
            boundary: Boundary::Discontinuous {
                n_plateau,
                c_plateau,
            },
            chain_length,
        }
    }

    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn kind(&self) -> CandidateKind {
        match self.boundary {
            Boundary::Contiguous { .. } => CandidateKind::Contiguous,
            Boundary::Discontinuous { .. } => CandidateKind::Discontinuous,
        }
    }

    pub fn plateaus(&self) -> Vec<Plateau> {
        match self.boundary {
            Boundary::Contiguous { plateau } => vec![plateau],
            Boundary::Discontinuous {
                n_plateau,
                c_plateau,
            } => vec![n_plateau, c_plateau],
        }
    }

    /// The split positions at which domains are cut.
    pub fn midpoints(&self) -> Vec<usize> {
        self.plateaus().iter().map(Plateau::midpoint).collect()
    }

    /// Domain ranges, each domain being one or two segments.
    pub fn domains(&self) -> Vec<Vec<RangeInclusive<usize>>> {
        let l = self.chain_length;
        match self.boundary {
            Boundary::Contiguous { plateau } => {
                let m = plateau.midpoint();
                vec![vec![1..=m], vec![m + 1..=l]]
            }
            Boundary::Discontinuous {
                n_plateau,
                c_plateau,
            } => {
                let (n, c) = (n_plateau.midpoint(), c_plateau.midpoint());
                vec![vec![1..=n, c + 1..=l], vec![n + 1..=c]]
            }
        }
    }

    /// Domain ranges with every plateau position left out of both domains.
    fn cores(&self) -> Vec<Vec<RangeInclusive<usize>>> {
        let l = self.chain_length;
        match self.boundary {
            Boundary::Contiguous { plateau } => {
                vec![vec![1..=plateau.first()], vec![plateau.last() + 1..=l]]
            }
            Boundary::Discontinuous {
                n_plateau,
                c_plateau,
            } => vec![
                vec![1..=n_plateau.first(), c_plateau.last() + 1..=l],
                vec![n_plateau.last() + 1..=c_plateau.first()],
            ],
        }
    }

    /// Linker ranges between domain cores. An empty range means the cores
    /// touch without a linker.
    pub fn linkers(&self) -> Vec<RangeInclusive<usize>> {
        self.plateaus()
            .iter()
            .map(|p| p.first() + 1..=p.last())
            .collect()
    }

    /// `(1-m)(m+1-L)` or `(1-n,c+1-L)(n+1-c)`.
    pub fn partition_label(&self) -> String {
        let domains = self.domains();
        format!("({})({})", segments(&domains[0]), segments(&domains[1]))
    }

    /// The partition written with the full plateau extent, linkers inline.
    pub fn linker_label(&self) -> String {
        let cores = self.cores();
        format!(
            "({}){}({})",
            segments(&cores[0]),
            segments(&self.linkers()),
            segments(&cores[1])
        )
    }
}

/// `a-b,c-d`, printing empty ranges as written.
fn segments(ranges: &[RangeInclusive<usize>]) -> String {
    ranges
        .iter()
        .map(|r| format!("{}-{}", r.start(), r.end()))
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6}\t{}\t{}\t{}",
            self.score,
            self.kind(),
            self.partition_label(),
            self.linker_label()
        )
    }
}
