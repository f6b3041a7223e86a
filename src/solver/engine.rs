//! Main Mastermind solver interface

use super::strategy::Strategy;
use crate::core::{Code, Feedback, SolverError};

/// Main Mastermind solver
///
/// Coordinates play against a hidden key: filters the code space down to the
/// codes consistent with the feedback so far and asks the strategy for the
/// next guess.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    codes: &'a [Code],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver over `codes`, the full set of possible keys
    pub const fn new(strategy: S, codes: &'a [Code]) -> Self {
        Self { strategy, codes }
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Every possible key, in code space order
    #[must_use]
    pub const fn codes(&self) -> &'a [Code] {
        self.codes
    }

    /// Get the next guess given previous guesses and their feedback
    ///
    /// # Errors
    /// Returns `SolverError::EmptyDomain` if no code is consistent with the
    /// history (the feedback was contradictory), or any strategy error.
    pub fn next_guess(&self, history: &[(Code, Feedback)]) -> Result<Code, SolverError> {
        let candidates = self.filter_candidates(history)?;
        self.strategy.select_guess(&candidates)
    }

    /// Codes that would have produced every observed feedback
    ///
    /// Preserves the order of the code space, so replaying a game visits the
    /// same consistent sets the tree analyzer does.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidCode` if a guess in the history does not
    /// match the code length.
    pub fn filter_candidates(
        &self,
        history: &[(Code, Feedback)],
    ) -> Result<Vec<Code>, SolverError> {
        let mut candidates = Vec::new();

        for candidate in self.codes {
            let mut consistent = true;
            for (guess, observed) in history {
                if Feedback::calculate(guess, candidate)? != *observed {
                    consistent = false;
                    break;
                }
            }
            if consistent {
                candidates.push(candidate.clone());
            }
        }

        Ok(candidates)
    }

    /// Count how many candidates remain given the history
    ///
    /// # Errors
    /// Same as `filter_candidates`.
    pub fn count_candidates(&self, history: &[(Code, Feedback)]) -> Result<usize, SolverError> {
        Ok(self.filter_candidates(history)?.len())
    }
}
