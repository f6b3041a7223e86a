//! Turning a histogram scorer into a playable strategy
//!
//! Every candidate guess is scored by the feedback histogram it induces over
//! the consistent set. Candidates with identical histograms are
//! interchangeable, so they are grouped and scored once per group.

use super::partition::{Histogram, partition_by};
use super::scoring::Scorer;
use super::strategy::Strategy;
use crate::core::{Code, CodeSpace, Feedback, SolverError};
use rayon::prelude::*;
use tracing::trace;

/// The codes a strategy may guess from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CandidatePool {
    /// Guess only from the current consistent set
    #[default]
    Unrestricted,
    /// Guess from this fixed list, whether or not a code is still consistent
    Fixed(Vec<Code>),
}

impl CandidatePool {
    /// The codes to consider for a given consistent set
    #[must_use]
    pub fn resolve<'a>(&'a self, consistent: &'a [Code]) -> &'a [Code] {
        match self {
            Self::Unrestricted => consistent,
            Self::Fixed(codes) => codes,
        }
    }
}

/// A strategy built from a pool and a scorer
///
/// # Examples
/// ```
/// use mastermind_solver::core::CodeSpace;
/// use mastermind_solver::solver::{CandidatePool, Generalized, Strategy, WorstCase};
///
/// let codes = CodeSpace::new(3, 2).unwrap().generate();
/// let strategy = Generalized::new(CandidatePool::Unrestricted, WorstCase).unwrap();
///
/// let guess = strategy.select_guess(&codes).unwrap();
/// assert!(codes.contains(&guess));
/// ```
#[derive(Debug, Clone)]
pub struct Generalized<S> {
    pool: CandidatePool,
    scorer: S,
}

impl<S: Scorer> Generalized<S> {
    /// Create a strategy from a candidate pool and a scorer
    ///
    /// # Errors
    /// - `SolverError::EmptyDomain` for a `Fixed` pool with no codes
    /// - `SolverError::InvalidCode` if the fixed pool mixes code lengths
    pub fn new(pool: CandidatePool, scorer: S) -> Result<Self, SolverError> {
        if let CandidatePool::Fixed(codes) = &pool {
            let first = codes
                .first()
                .ok_or(SolverError::EmptyDomain("fixed candidate pool"))?;
            check_lengths(first.len(), codes)?;
        }

        Ok(Self { pool, scorer })
    }

    /// Create a strategy whose fixed pool must belong to `space`
    ///
    /// # Errors
    /// As `new`, plus `SolverError::InvalidCode` for a pool code with the
    /// wrong length or a color outside the space.
    pub fn for_space(
        pool: CandidatePool,
        scorer: S,
        space: CodeSpace,
    ) -> Result<Self, SolverError> {
        if let CandidatePool::Fixed(codes) = &pool {
            codes.iter().try_for_each(|code| space.validate(code))?;
        }
        Self::new(pool, scorer)
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }
}

impl<S: Scorer> Strategy for Generalized<S> {
    fn select_guess(&self, consistent: &[Code]) -> Result<Code, SolverError> {
        select_best_guess(self.pool.resolve(consistent), consistent, &self.scorer)
    }
}

/// Select the best guess from `candidates` against the `consistent` set
///
/// 1. Group candidates by the histogram they induce over `consistent`
/// 2. Score each group once with `scorer(histogram, group size)`
/// 3. Keep every group tied at the minimum score
/// 4. Prefer consistent representatives, then the smallest code
///
/// # Errors
/// - `SolverError::EmptyDomain` if either slice is empty
/// - `SolverError::InvalidCode` if the codes do not all share one length
pub fn select_best_guess<S: Scorer + ?Sized>(
    candidates: &[Code],
    consistent: &[Code],
    scorer: &S,
) -> Result<Code, SolverError> {
    let pegs = consistent
        .first()
        .ok_or(SolverError::EmptyDomain("consistent set"))?
        .len();
    if candidates.is_empty() {
        return Err(SolverError::EmptyDomain("candidate pool"));
    }
    check_lengths(pegs, consistent)?;
    check_lengths(pegs, candidates)?;

    let histograms: Vec<(Histogram, &Code)> = candidates
        .par_iter()
        .map(|guess| (Histogram::of(guess, consistent), guess))
        .collect();

    // Smallest code of each group stands in for the whole group
    let groups: Vec<(Histogram, &Code, usize)> = partition_by(histograms, |(h, _)| h.clone())
        .into_iter()
        .filter_map(|(histogram, members)| {
            let size = members.len();
            members
                .into_iter()
                .map(|(_, code)| code)
                .min()
                .map(|rep| (histogram, rep, size))
        })
        .collect();

    let scored: Vec<(f64, &Histogram, &Code)> = groups
        .iter()
        .map(|(histogram, rep, size)| (scorer.score(histogram, *size), histogram, *rep))
        .collect();

    let best = scored
        .iter()
        .map(|(score, _, _)| *score)
        .min_by(f64::total_cmp)
        .ok_or(SolverError::EmptyDomain("candidate pool"))?;

    // A candidate is consistent iff some key answers it with (pegs, 0)
    let correct = Feedback::correct(pegs as u8);
    let tied = scored
        .iter()
        .filter(|(score, _, _)| score.total_cmp(&best).is_eq());
    let (consistent_reps, other_reps): (Vec<&(f64, &Histogram, &Code)>, Vec<_>) =
        tied.partition(|(_, histogram, _)| histogram.contains(correct));

    let preferred = if consistent_reps.is_empty() {
        other_reps
    } else {
        consistent_reps
    };

    let guess = preferred
        .into_iter()
        .map(|entry| entry.2)
        .min()
        .cloned()
        .ok_or(SolverError::EmptyDomain("candidate pool"))?;

    trace!(
        consistent = consistent.len(),
        candidates = candidates.len(),
        groups = groups.len(),
        score = best,
        %guess,
        "selected guess"
    );

    Ok(guess)
}

fn check_lengths(pegs: usize, codes: &[Code]) -> Result<(), SolverError> {
    match codes.iter().find(|code| code.len() != pegs) {
        Some(code) => Err(SolverError::length_mismatch(pegs, code.len())),
        None => Ok(()),
    }
}
