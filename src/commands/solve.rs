//! Code solving command
//!
//! Plays one game against a hidden key and records every step.

use crate::core::{Code, Feedback, SolverError};
use crate::solver::{Solver, Strategy};
use rand::seq::IndexedRandom;
use tracing::debug;

/// Guess limit for a single game
///
/// Strategies restricted to consistent codes always finish well within it;
/// it only stops a strategy with a free pool that keeps repeating itself.
pub const DEFAULT_MAX_GUESSES: usize = 20;

/// Configuration for solving a code
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Key to play against; a random code from the space when `None`
    pub secret: Option<Code>,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Option<Code>) -> Self {
        Self {
            secret,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// Result of solving a code
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub secret: Code,
    pub guesses: Vec<GuessStep>,
}

/// A single guess step in the game
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Whether the guess could still have been the key
    pub consistent: bool,
}

/// Play `solver` against the configured key until it is found
///
/// # Errors
///
/// Returns an error if:
/// - The solver holds no codes and no key was given
/// - The key does not fit the solver's code space
/// - The strategy cannot provide a guess
pub fn solve_code<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, SolverError> {
    let secret = match config.secret {
        Some(code) => code,
        None => solver
            .codes()
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(SolverError::EmptyDomain("code space"))?,
    };

    if !solver.codes().contains(&secret) {
        return Err(SolverError::InvalidCode(format!(
            "{secret} is not in the code space"
        )));
    }

    let correct = Feedback::correct(secret.len() as u8);
    let mut history: Vec<(Code, Feedback)> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut candidates = solver.filter_candidates(&history)?;

    for _ in 0..config.max_guesses {
        let candidates_before = candidates.len();
        let guess = solver.strategy().select_guess(&candidates)?;
        let consistent = candidates.contains(&guess);
        let feedback = Feedback::calculate(&guess, &secret)?;

        history.push((guess.clone(), feedback));
        candidates = solver.filter_candidates(&history)?;

        debug!(
            %guess,
            %feedback,
            before = candidates_before,
            after = candidates.len(),
            "guess played"
        );

        guesses.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: candidates.len(),
            consistent,
        });

        if feedback == correct {
            return Ok(SolveResult {
                success: true,
                secret,
                guesses,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        secret,
        guesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{GuessDistribution, summarize};
    use crate::core::CodeSpace;
    use crate::solver::{CandidatePool, StrategyType, ZeroStep};

    fn code(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    #[test]
    fn solve_given_secret() {
        let space = CodeSpace::new(4, 3).unwrap();
        let codes = space.generate();
        let strategy =
            StrategyType::from_name("worst-case", space, CandidatePool::Unrestricted).unwrap();
        let solver = Solver::new(strategy, &codes);

        let result = solve_code(SolveConfig::new(Some(code("DCB"))), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.secret, code("DCB"));
        let last = result.guesses.last().unwrap();
        assert_eq!(last.guess, code("DCB"));
        assert_eq!(last.feedback, Feedback::correct(3));
        assert_eq!(last.candidates_after, 1);
    }

    #[test]
    fn candidates_shrink_every_step() {
        let codes = CodeSpace::new(3, 3).unwrap().generate();
        let solver = Solver::new(ZeroStep, &codes);

        let result = solve_code(SolveConfig::new(Some(code("CCA"))), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses[0].candidates_before, 27);
        for step in &result.guesses {
            assert!(step.consistent);
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(result.guesses.last().unwrap().candidates_after, 1);
        for pair in result.guesses.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn random_secret_is_from_space() {
        let codes = CodeSpace::new(3, 2).unwrap().generate();
        let solver = Solver::new(ZeroStep, &codes);

        let result = solve_code(SolveConfig::new(None), &solver).unwrap();

        assert!(result.success);
        assert!(codes.contains(&result.secret));
    }

    #[test]
    fn secret_outside_space_is_rejected() {
        let codes = CodeSpace::new(3, 2).unwrap().generate();
        let solver = Solver::new(ZeroStep, &codes);

        let wrong_color = solve_code(SolveConfig::new(Some(code("AD"))), &solver);
        let wrong_length = solve_code(SolveConfig::new(Some(code("AAA"))), &solver);

        assert!(matches!(wrong_color, Err(SolverError::InvalidCode(_))));
        assert!(matches!(wrong_length, Err(SolverError::InvalidCode(_))));
    }

    #[test]
    fn guess_limit_is_respected() {
        let codes = CodeSpace::new(4, 3).unwrap().generate();
        let solver = Solver::new(ZeroStep, &codes);
        let mut config = SolveConfig::new(Some(code("DDD")));
        config.max_guesses = 2;

        let result = solve_code(config, &solver).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 2);
    }

    #[test]
    fn playing_every_key_matches_tree_analysis() {
        let space = CodeSpace::new(3, 3).unwrap();
        let codes = space.generate();

        for name in StrategyType::NAMES {
            for pool in [CandidatePool::Unrestricted, CandidatePool::Fixed(codes.clone())] {
                let strategy = StrategyType::from_name(name, space, pool).unwrap();
                let solver = Solver::new(&strategy, &codes);

                let played: GuessDistribution = codes
                    .iter()
                    .map(|secret| {
                        let config = SolveConfig::new(Some(secret.clone()));
                        let result = solve_code(config, &solver).unwrap();
                        assert!(result.success, "{name} failed on {secret}");
                        (result.guesses.len(), 1)
                    })
                    .collect();

                assert_eq!(played, summarize(&strategy, &codes).unwrap(), "{name}");
            }
        }
    }
}
