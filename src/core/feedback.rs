//! Mastermind feedback calculation and representation
//!
//! Feedback is the pair of peg counts the code maker answers with:
//! - `exact`: pegs with the right symbol in the right position (black pegs)
//! - `color_only`: further symbol matches in the wrong position (white pegs)

use super::{Code, SolverError};
use std::fmt;

/// Feedback for a guess scored against a key
///
/// Invariant: `exact + color_only <= pegs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Feedback {
    exact: u8,
    color_only: u8,
}

impl Feedback {
    /// Create feedback from raw peg counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Self {
        Self { exact, color_only }
    }

    /// The feedback a fully correct guess receives: `(pegs, 0)`
    #[inline]
    #[must_use]
    pub const fn correct(pegs: u8) -> Self {
        Self::new(pegs, 0)
    }

    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    #[inline]
    #[must_use]
    pub const fn color_only(self) -> u8 {
        self.color_only
    }

    /// Check whether this is the answer to a correct guess on `pegs` pegs
    #[inline]
    #[must_use]
    pub const fn is_correct(self, pegs: u8) -> bool {
        self.exact == pegs && self.color_only == 0
    }

    /// Calculate the feedback when `guess` is played against `key`
    ///
    /// # Algorithm
    /// 1. `exact` counts positions where both codes hold the same symbol
    /// 2. The multiset intersection counts, per symbol, the smaller of the two
    ///    occurrence counts, so a repeated symbol in the guess only matches as
    ///    many copies as the key still holds
    /// 3. `color_only` is the intersection size minus `exact`
    ///
    /// # Errors
    /// Returns `SolverError::InvalidCode` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let guess = Code::parse("AABB").unwrap();
    /// let key = Code::parse("ABCA").unwrap();
    ///
    /// // A in position 0 is exact; the second A and one B match elsewhere
    /// let feedback = Feedback::calculate(&guess, &key).unwrap();
    /// assert_eq!(feedback, Feedback::new(1, 2));
    /// ```
    pub fn calculate(guess: &Code, key: &Code) -> Result<Self, SolverError> {
        if guess.len() != key.len() {
            return Err(SolverError::length_mismatch(guess.len(), key.len()));
        }

        Ok(Self::between(guess, key))
    }

    /// Feedback for two codes already known to share a length
    #[must_use]
    pub(crate) fn between(guess: &Code, key: &Code) -> Self {
        debug_assert_eq!(guess.len(), key.len(), "codes must share a length");

        let exact = guess
            .symbols()
            .iter()
            .zip(key.symbols())
            .filter(|(g, k)| g == k)
            .count() as u8;

        let guess_counts = guess.symbol_counts();
        let key_counts = key.symbol_counts();
        let common: u8 = guess_counts
            .iter()
            .zip(&key_counts)
            .map(|(&g, &k)| g.min(k))
            .sum();

        Self::new(exact, common - exact)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.color_only)
    }
}
