//! One-step-ahead scoring rules
//!
//! A scorer rates a guess by the histogram of feedback outcomes it would
//! produce against the consistent set. Lower scores are preferred.
//!
//! Notation used below: `k` is the number of distinct feedback values (the
//! branching factor), `s` the sum of the histogram, `n` the number of
//! candidate guesses sharing the histogram.

use super::partition::Histogram;
use crate::core::{CodeSpace, Feedback};

/// Rates a guess from its feedback histogram; lower is better
///
/// Any `Fn(&Histogram, usize) -> f64` closure is a scorer, so ad-hoc rules
/// compose with the generalizer without a dedicated type.
pub trait Scorer: Sync {
    /// Score a histogram shared by `group_size` candidate guesses
    fn score(&self, histogram: &Histogram, group_size: usize) -> f64;
}

impl<F> Scorer for F
where
    F: Fn(&Histogram, usize) -> f64 + Sync,
{
    fn score(&self, histogram: &Histogram, group_size: usize) -> f64 {
        self(histogram, group_size)
    }
}

/// Minimize the largest resulting consistent set
///
/// Score: `max(n_i)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorstCase;

impl Scorer for WorstCase {
    fn score(&self, histogram: &Histogram, _group_size: usize) -> f64 {
        histogram.max_count() as f64
    }
}

/// Generalized Shannon-Fano: approximate remaining prefix-code length
///
/// Score: `Σ n_i·ln(n_i)`, where buckets of size 0 or 1 contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShannonFano;

impl Scorer for ShannonFano {
    fn score(&self, histogram: &Histogram, _group_size: usize) -> f64 {
        // Summed in ascending order so equal multisets give bit-identical scores
        let mut counts: Vec<usize> = histogram.counts().filter(|&n| n > 1).collect();
        counts.sort_unstable();

        counts
            .into_iter()
            .map(|n| {
                let n = n as f64;
                n * n.ln()
            })
            .sum()
    }
}

/// Minimize the expected size of the resulting consistent set
///
/// Score: `Σ n_i²`, proportional to the expected size.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedSize;

impl Scorer for ExpectedSize {
    fn score(&self, histogram: &Histogram, _group_size: usize) -> f64 {
        histogram.counts().map(|n| (n * n) as f64).sum()
    }
}

/// Greedily maximize the effective branching factor
///
/// Score: `log_k(s)`. A guess with a single outcome gains nothing and scores
/// `+∞`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchMax;

impl Scorer for BranchMax {
    fn score(&self, histogram: &Histogram, _group_size: usize) -> f64 {
        if histogram.branches() <= 1 {
            return f64::INFINITY;
        }
        log_base(histogram.branches(), histogram.total())
    }
}

/// Branch maximizing with interchangeable consistent candidates collapsed
///
/// Score: `0` if `n = s`, else `log_k(s - n + 1)`. When the histogram has no
/// bucket for the correct feedback the guess is inconsistent and `n` is taken
/// as `1`.
#[derive(Debug, Clone, Copy)]
pub struct RefinedBranchMax {
    correct: Feedback,
}

impl RefinedBranchMax {
    #[must_use]
    pub const fn new(correct: Feedback) -> Self {
        Self { correct }
    }

    /// Rule for `space`, using its `(pegs, 0)` feedback as the correct one
    #[must_use]
    pub const fn for_space(space: CodeSpace) -> Self {
        Self::new(space.correct_feedback())
    }
}

impl Scorer for RefinedBranchMax {
    fn score(&self, histogram: &Histogram, group_size: usize) -> f64 {
        let total = histogram.total();
        let interchangeable = if histogram.contains(self.correct) {
            group_size
        } else {
            1
        };

        if interchangeable >= total {
            return 0.0;
        }

        log_base(histogram.branches(), total - interchangeable + 1)
    }
}

/// `log_base(value)` with the degenerate cases resolved locally
///
/// `log_b(1)` is `0` for every base, including the undefined `log_1(1)`. Any
/// other value with base `<= 1` means no information is gained and is `+∞`.
fn log_base(base: usize, value: usize) -> f64 {
    if value <= 1 {
        return 0.0;
    }
    if base <= 1 {
        return f64::INFINITY;
    }
    (value as f64).ln() / (base as f64).ln()
}

/// Runtime-selectable scoring rule
#[derive(Debug, Clone, Copy)]
pub enum ScorerKind {
    WorstCase,
    ShannonFano,
    ExpectedSize,
    BranchMax,
    RefinedBranchMax(RefinedBranchMax),
}

impl ScorerKind {
    /// Names accepted by `from_name`, in presentation order
    pub const NAMES: [&'static str; 5] = [
        "worst-case",
        "shannon-fano",
        "expected-size",
        "branch-max",
        "refined-branch-max",
    ];

    /// Create a scoring rule from its name
    ///
    /// The refined rule takes its correct feedback from `space`. Returns
    /// `None` for an unknown name.
    #[must_use]
    pub fn from_name(name: &str, space: CodeSpace) -> Option<Self> {
        match name {
            "worst-case" | "minimax" => Some(Self::WorstCase),
            "shannon-fano" | "entropy" => Some(Self::ShannonFano),
            "expected-size" => Some(Self::ExpectedSize),
            "branch-max" => Some(Self::BranchMax),
            "refined-branch-max" => Some(Self::RefinedBranchMax(RefinedBranchMax::for_space(
                space,
            ))),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WorstCase => "worst-case",
            Self::ShannonFano => "shannon-fano",
            Self::ExpectedSize => "expected-size",
            Self::BranchMax => "branch-max",
            Self::RefinedBranchMax(_) => "refined-branch-max",
        }
    }
}

impl Scorer for ScorerKind {
    fn score(&self, histogram: &Histogram, group_size: usize) -> f64 {
        match self {
            Self::WorstCase => WorstCase.score(histogram, group_size),
            Self::ShannonFano => ShannonFano.score(histogram, group_size),
            Self::ExpectedSize => ExpectedSize.score(histogram, group_size),
            Self::BranchMax => BranchMax.score(histogram, group_size),
            Self::RefinedBranchMax(s) => s.score(histogram, group_size),
        }
    }
}
