//! Partitioning codes by a classifying function
//!
//! The same grouping step drives guess scoring (codes bucketed by the feedback
//! they would produce) and the tree analyzer (consistent sets split into cells).

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::hash::Hash;

/// Group items by `classify`, preserving relative order within each cell
///
/// Every item lands in exactly one cell, so the cells are disjoint and their
/// union is the input.
///
/// # Examples
/// ```
/// use mastermind_solver::solver::partition_by;
///
/// let cells = partition_by(1..=6, |n| n % 3);
/// assert_eq!(cells[&0], vec![3, 6]);
/// assert_eq!(cells[&1], vec![1, 4]);
/// assert_eq!(cells[&2], vec![2, 5]);
/// ```
pub fn partition_by<T, K, F>(
    items: impl IntoIterator<Item = T>,
    mut classify: F,
) -> FxHashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut cells: FxHashMap<K, Vec<T>> = FxHashMap::default();

    for item in items {
        cells.entry(classify(&item)).or_default().push(item);
    }

    cells
}

/// Count items per classification key
pub fn count_by<T, K, F>(
    items: impl IntoIterator<Item = T>,
    mut classify: F,
) -> FxHashMap<K, usize>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut counts = FxHashMap::default();

    for item in items {
        *counts.entry(classify(&item)).or_insert(0) += 1;
    }

    counts
}

/// Feedback-outcome histogram of one guess against a consistent set
///
/// Maps each feedback value to the number of keys that would produce it.
/// Two guesses with equal histograms are interchangeable for scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Histogram(BTreeMap<Feedback, usize>);

impl Histogram {
    /// Build the histogram of `guess` against every key in `keys`
    ///
    /// All codes must share a length; callers validate shapes beforehand.
    #[must_use]
    pub fn of(guess: &Code, keys: &[Code]) -> Self {
        count_by(keys, |key| Feedback::between(guess, key))
            .into_iter()
            .collect()
    }

    /// Number of keys producing `feedback` (zero if none)
    #[must_use]
    pub fn get(&self, feedback: Feedback) -> usize {
        self.0.get(&feedback).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, feedback: Feedback) -> bool {
        self.0.contains_key(&feedback)
    }

    /// Occurrence counts, in feedback order
    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.values().copied()
    }

    /// Number of distinct feedback values (the branching factor)
    #[must_use]
    pub fn branches(&self) -> usize {
        self.0.len()
    }

    /// Total number of keys counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Size of the largest bucket
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.0.values().copied().max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feedback, usize)> + '_ {
        self.0.iter().map(|(&f, &n)| (f, n))
    }
}

impl FromIterator<(Feedback, usize)> for Histogram {
    fn from_iter<I: IntoIterator<Item = (Feedback, usize)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (feedback, n) in iter {
            *counts.entry(feedback).or_insert(0) += n;
        }
        Self(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodeSpace;
    use std::collections::HashSet;

    #[test]
    fn partition_preserves_order_within_cells() {
        let cells = partition_by(vec!["apple", "bob", "avocado", "banana", "cherry"], |s| {
            s.as_bytes()[0]
        });

        assert_eq!(cells[&b'a'], vec!["apple", "avocado"]);
        assert_eq!(cells[&b'b'], vec!["bob", "banana"]);
        assert_eq!(cells[&b'c'], vec!["cherry"]);
    }

    #[test]
    fn partition_is_disjoint_cover() {
        let codes = CodeSpace::new(3, 3).unwrap().generate();
        let guess = Code::parse("ABC").unwrap();
        let cells = partition_by(codes.iter().cloned(), |k| Feedback::between(&guess, k));

        let total: usize = cells.values().map(Vec::len).sum();
        assert_eq!(total, codes.len());

        let union: HashSet<Code> = cells.values().flatten().cloned().collect();
        assert_eq!(union.len(), codes.len());
        assert!(codes.iter().all(|c| union.contains(c)));
    }

    #[test]
    fn partition_empty_input() {
        let cells = partition_by(Vec::<u32>::new(), |n| *n);
        assert!(cells.is_empty());
    }

    #[test]
    fn count_by_matches_partition_sizes() {
        let counts = count_by(0..10, |n| n % 4);
        let cells = partition_by(0..10, |n| n % 4);

        for (key, cell) in &cells {
            assert_eq!(counts[key], cell.len());
        }
        assert_eq!(counts.values().sum::<usize>(), 10);
    }

    #[test]
    fn histogram_of_guess() {
        let keys: Vec<Code> = ["AB", "BA", "AA", "BB"]
            .iter()
            .map(|t| Code::parse(t).unwrap())
            .collect();
        let histogram = Histogram::of(&Code::parse("AB").unwrap(), &keys);

        assert_eq!(histogram.get(Feedback::new(2, 0)), 1);
        assert_eq!(histogram.get(Feedback::new(0, 2)), 1);
        assert_eq!(histogram.get(Feedback::new(1, 0)), 2);
        assert_eq!(histogram.get(Feedback::new(0, 0)), 0);
        assert!(histogram.contains(Feedback::new(2, 0)));
        assert_eq!(histogram.branches(), 3);
        assert_eq!(histogram.total(), 4);
        assert_eq!(histogram.max_count(), 2);
    }

    #[test]
    fn histogram_from_iter_merges_duplicates() {
        let histogram: Histogram = [
            (Feedback::new(0, 0), 2),
            (Feedback::new(1, 0), 1),
            (Feedback::new(0, 0), 3),
        ]
        .into_iter()
        .collect();

        assert_eq!(histogram.get(Feedback::new(0, 0)), 5);
        assert_eq!(histogram.branches(), 2);
    }

    #[test]
    fn equal_histograms_hash_equal() {
        let a: Histogram = [(Feedback::new(1, 0), 2), (Feedback::new(0, 1), 1)]
            .into_iter()
            .collect();
        let b: Histogram = [(Feedback::new(0, 1), 1), (Feedback::new(1, 0), 2)]
            .into_iter()
            .collect();

        let cells = partition_by(vec![a, b], Histogram::clone);
        assert_eq!(cells.len(), 1);
    }
}
