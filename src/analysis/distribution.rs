//! Guess-count distributions and their aggregates

use crate::core::SolverError;
use std::collections::BTreeMap;
use std::fmt;

/// Number of keys solved in exactly each number of guesses
///
/// Keys are guess counts, values are key counts; iteration is in ascending
/// guess-count order. Merging is element-wise addition, which is associative
/// and commutative, so subtrees can be combined in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessDistribution(BTreeMap<usize, usize>);

impl GuessDistribution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` keys solved at `guesses`
    pub fn record(&mut self, guesses: usize, count: usize) {
        if count > 0 {
            *self.0.entry(guesses).or_insert(0) += count;
        }
    }

    /// Element-wise sum of two distributions
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (guesses, count) in other.0 {
            self.record(guesses, count);
        }
        self
    }

    /// Every guess count raised by one
    #[must_use]
    pub fn shifted(self) -> Self {
        Self(self.0.into_iter().map(|(g, n)| (g + 1, n)).collect())
    }

    /// Keys solved in exactly `guesses` guesses
    #[must_use]
    pub fn get(&self, guesses: usize) -> usize {
        self.0.get(&guesses).copied().unwrap_or(0)
    }

    /// Total number of keys
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Largest number of guesses any key needs
    #[must_use]
    pub fn max_guesses(&self) -> Option<usize> {
        self.0.keys().next_back().copied()
    }

    /// `(guesses, count)` pairs in ascending guess order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&g, &n)| (g, n))
    }

    /// Mean number of guesses per key
    ///
    /// # Errors
    /// Returns `SolverError::EmptyDomain` if the distribution holds no keys.
    pub fn expected_guesses(&self) -> Result<f64, SolverError> {
        expected_guesses(self)
    }
}

/// Weighted mean `Σ guesses·count / Σ count`
///
/// # Errors
/// Returns `SolverError::EmptyDomain` on an empty or all-zero distribution.
///
/// # Examples
/// ```
/// use mastermind_solver::analysis::{GuessDistribution, expected_guesses};
///
/// let distribution: GuessDistribution = [(1, 1), (2, 3)].into_iter().collect();
/// assert!((expected_guesses(&distribution).unwrap() - 1.75).abs() < 1e-12);
/// ```
pub fn expected_guesses(distribution: &GuessDistribution) -> Result<f64, SolverError> {
    let total = distribution.total();
    if total == 0 {
        return Err(SolverError::EmptyDomain("guess distribution"));
    }

    let weighted: usize = distribution.iter().map(|(g, n)| g * n).sum();
    Ok(weighted as f64 / total as f64)
}

impl FromIterator<(usize, usize)> for GuessDistribution {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut distribution = Self::new();
        for (guesses, count) in iter {
            distribution.record(guesses, count);
        }
        distribution
    }
}

impl fmt::Display for GuessDistribution {
    /// Formats as `{1:1, 2:4, 3:25}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (guesses, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{guesses}:{count}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(pairs: &[(usize, usize)]) -> GuessDistribution {
        pairs.iter().copied().collect()
    }

    #[test]
    fn merge_adds_elementwise() {
        let merged = dist(&[(1, 1), (2, 3)]).merge(dist(&[(2, 2), (4, 1)]));
        assert_eq!(merged, dist(&[(1, 1), (2, 5), (4, 1)]));
    }

    #[test]
    fn merge_is_commutative() {
        let a = dist(&[(0, 1), (3, 2)]);
        let b = dist(&[(1, 4), (3, 1)]);
        assert_eq!(a.clone().merge(b.clone()), b.merge(a));
    }

    #[test]
    fn shifted_raises_every_depth() {
        let shifted = dist(&[(0, 1), (1, 2)]).shifted();
        assert_eq!(shifted, dist(&[(1, 1), (2, 2)]));
        assert_eq!(shifted.total(), 3);
    }

    #[test]
    fn record_ignores_zero_counts() {
        let mut d = GuessDistribution::new();
        d.record(3, 0);
        assert!(d.is_empty());
        assert_eq!(d.max_guesses(), None);
        assert_eq!(d.to_string(), "{}");
    }

    #[test]
    fn accessors() {
        let d = dist(&[(1, 1), (2, 7), (3, 33), (4, 23)]);
        assert_eq!(d.total(), 64);
        assert_eq!(d.get(3), 33);
        assert_eq!(d.get(5), 0);
        assert_eq!(d.max_guesses(), Some(4));
    }

    #[test]
    fn display_in_ascending_order() {
        let d = dist(&[(3, 25), (1, 1), (2, 4)]);
        assert_eq!(d.to_string(), "{1:1, 2:4, 3:25}");
    }

    #[test]
    fn expected_guesses_weighted_mean() {
        let d = dist(&[(1, 1), (2, 7), (3, 33), (4, 23)]);
        let expected = (1 + 14 + 99 + 92) as f64 / 64.0;
        assert!((d.expected_guesses().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn expected_guesses_empty_is_error() {
        assert!(matches!(
            expected_guesses(&GuessDistribution::new()),
            Err(SolverError::EmptyDomain(_))
        ));
    }
}
