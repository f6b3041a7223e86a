//! Exact guess-count analysis over the implicit game tree
//!
//! Every node of the tree is a consistent set. The strategy picks a guess,
//! the rest of the set splits into cells by the feedback each key would give,
//! and each cell is a child node. Children share no data, so they are
//! evaluated in parallel and folded back with `GuessDistribution::merge`.

use super::distribution::GuessDistribution;
use crate::core::{Code, Feedback, SolverError};
use crate::solver::{Strategy, partition_by};
use rayon::prelude::*;
use tracing::instrument;

/// Below this many keys, child cells are evaluated on the current thread
const PARALLEL_THRESHOLD: usize = 64;

/// Distribution of guesses `strategy` needs over every key in `consistent`
///
/// The returned distribution sums to `consistent.len()`.
///
/// # Errors
/// - `SolverError::EmptyDomain` if `consistent` is empty
/// - `SolverError::InvalidCode` if the codes (or a guess) differ in length
/// - `SolverError::Stalled` if a guess fails to shrink its consistent set
/// - any error the strategy itself returns
///
/// # Examples
/// ```
/// use mastermind_solver::analysis::summarize;
/// use mastermind_solver::core::CodeSpace;
/// use mastermind_solver::solver::ZeroStep;
///
/// let codes = CodeSpace::new(2, 1).unwrap().generate();
/// let distribution = summarize(&ZeroStep, &codes).unwrap();
///
/// // "A" is guessed first; "B" needs a second guess
/// assert_eq!(distribution.to_string(), "{1:1, 2:1}");
/// ```
#[instrument(level = "debug", skip_all, fields(keys = consistent.len()))]
pub fn summarize<S: Strategy + ?Sized>(
    strategy: &S,
    consistent: &[Code],
) -> Result<GuessDistribution, SolverError> {
    let pegs = consistent
        .first()
        .ok_or(SolverError::EmptyDomain("consistent set"))?
        .len();

    if let Some(code) = consistent.iter().find(|code| code.len() != pegs) {
        return Err(SolverError::length_mismatch(pegs, code.len()));
    }

    summarize_node(strategy, consistent, pegs)
}

fn summarize_node<S: Strategy + ?Sized>(
    strategy: &S,
    consistent: &[Code],
    pegs: usize,
) -> Result<GuessDistribution, SolverError> {
    let guess = strategy.select_guess(consistent)?;
    if guess.len() != pegs {
        return Err(SolverError::length_mismatch(pegs, guess.len()));
    }

    let mut here = GuessDistribution::new();
    if consistent.contains(&guess) {
        here.record(0, 1);
    }

    let cells = partition_by(
        consistent.iter().filter(|&key| *key != guess).cloned(),
        |key| Feedback::between(&guess, key),
    );

    if let Some(cell) = cells.values().find(|cell| cell.len() == consistent.len()) {
        return Err(SolverError::Stalled {
            guess: guess.to_string(),
            size: cell.len(),
        });
    }

    let below = if consistent.len() < PARALLEL_THRESHOLD {
        cells
            .into_values()
            .try_fold(GuessDistribution::new(), |acc, cell| {
                summarize_node(strategy, &cell, pegs).map(|d| acc.merge(d))
            })?
    } else {
        cells
            .into_par_iter()
            .map(|(_, cell)| summarize_node(strategy, &cell, pegs))
            .try_reduce(GuessDistribution::new, |a, b| Ok(a.merge(b)))?
    };

    Ok(here.merge(below).shifted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::expected_guesses;
    use crate::core::CodeSpace;
    use crate::solver::{
        CandidatePool, Generalized, Histogram, RefinedBranchMax, ScorerKind, WorstCase, ZeroStep,
    };

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|t| Code::parse(t).unwrap()).collect()
    }

    fn dist(pairs: &[(usize, usize)]) -> GuessDistribution {
        pairs.iter().copied().collect()
    }

    #[test]
    fn zero_step_two_single_peg_codes() {
        let space = CodeSpace::new(2, 1).unwrap();
        let distribution = summarize(&ZeroStep, &space.generate()).unwrap();

        // "A" is solved by the first guess, "B" by the second
        assert_eq!(distribution, dist(&[(1, 1), (2, 1)]));
    }

    #[test]
    fn single_key_needs_one_guess_under_every_strategy() {
        let space = CodeSpace::new(4, 3).unwrap();
        let consistent = codes(&["BDA"]);
        let full = CandidatePool::Fixed(space.generate());

        let distribution = summarize(&ZeroStep, &consistent).unwrap();
        assert_eq!(distribution, dist(&[(1, 1)]));

        for name in ScorerKind::NAMES {
            let scorer = ScorerKind::from_name(name, space).unwrap();
            for pool in [CandidatePool::Unrestricted, full.clone()] {
                let strategy = Generalized::new(pool, scorer).unwrap();
                let distribution = summarize(&strategy, &consistent).unwrap();
                assert_eq!(distribution, dist(&[(1, 1)]), "{name}");
            }
        }
    }

    #[test]
    fn distribution_sums_to_set_size() {
        let space = CodeSpace::new(3, 3).unwrap();
        let all = space.generate();
        let subset: Vec<Code> = all.iter().step_by(2).cloned().collect();

        for name in ScorerKind::NAMES {
            let scorer = ScorerKind::from_name(name, space).unwrap();
            let strategy = Generalized::new(CandidatePool::Fixed(all.clone()), scorer).unwrap();

            assert_eq!(summarize(&strategy, &all).unwrap().total(), all.len());
            assert_eq!(summarize(&strategy, &subset).unwrap().total(), subset.len());
        }
        assert_eq!(summarize(&ZeroStep, &all).unwrap().total(), all.len());
    }

    #[test]
    fn guess_removal_partitions_remainder() {
        let consistent = CodeSpace::new(4, 3).unwrap().generate();
        let strategy = Generalized::new(CandidatePool::Unrestricted, WorstCase).unwrap();
        let guess = strategy.select_guess(&consistent).unwrap();

        let cells = partition_by(
            consistent.iter().filter(|&k| *k != guess).cloned(),
            |k| Feedback::between(&guess, k),
        );

        let covered: usize = cells.values().map(Vec::len).sum();
        assert_eq!(covered, consistent.len() - 1);
        assert!(cells.values().flatten().all(|k| *k != guess));
    }

    #[test]
    fn refined_branch_max_four_colors_three_pegs() {
        let space = CodeSpace::new(4, 3).unwrap();
        let all = space.generate();
        let strategy = Generalized::new(
            CandidatePool::Fixed(all.clone()),
            RefinedBranchMax::new(Feedback::correct(3)),
        )
        .unwrap();

        let distribution = summarize(&strategy, &all).unwrap();
        assert_eq!(distribution, dist(&[(1, 1), (2, 7), (3, 33), (4, 23)]));
    }

    #[test]
    fn worst_case_classic_consistent_only() {
        let all = CodeSpace::CLASSIC.generate();
        let strategy = Generalized::new(CandidatePool::Unrestricted, WorstCase).unwrap();

        let distribution = summarize(&strategy, &all).unwrap();
        assert_eq!(distribution.total(), 1296);
        assert_eq!(
            distribution,
            dist(&[(1, 1), (2, 12), (3, 99), (4, 468), (5, 662), (6, 54)])
        );

        let expected = expected_guesses(&distribution).unwrap();
        assert!((expected - 4.497).abs() < 0.001, "got {expected}");
    }

    #[test]
    fn parallel_and_sequential_paths_agree() {
        // 81 keys takes the parallel path at the root, small cells go sequential
        let all = CodeSpace::new(3, 4).unwrap().generate();
        let strategy = Generalized::new(CandidatePool::Unrestricted, WorstCase).unwrap();

        let first = summarize(&strategy, &all).unwrap();
        let second = summarize(&strategy, &all).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.total(), 81);
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(matches!(
            summarize(&ZeroStep, &[]),
            Err(SolverError::EmptyDomain(_))
        ));
    }

    #[test]
    fn mixed_lengths_are_rejected() {
        let consistent = codes(&["AB", "ABC"]);
        assert!(matches!(
            summarize(&ZeroStep, &consistent),
            Err(SolverError::InvalidCode(_))
        ));
    }

    #[test]
    fn non_splitting_guess_is_reported() {
        // Always guessing "CC" never separates {AA, BB}
        struct Stubborn;
        impl Strategy for Stubborn {
            fn select_guess(&self, _: &[Code]) -> Result<Code, SolverError> {
                Code::parse("CC")
            }
        }

        let consistent = codes(&["AA", "BB"]);
        assert!(matches!(
            summarize(&Stubborn, &consistent),
            Err(SolverError::Stalled { size: 2, .. })
        ));
    }

    #[test]
    fn custom_closure_scorer_runs_end_to_end() {
        let all = CodeSpace::new(3, 2).unwrap().generate();
        let most_branches = |h: &Histogram, _: usize| -(h.branches() as f64);
        let strategy = Generalized::new(CandidatePool::Unrestricted, most_branches).unwrap();

        let distribution = summarize(&strategy, &all).unwrap();
        assert_eq!(distribution.total(), 9);
        assert_eq!(distribution.get(1), 1);
    }
}
