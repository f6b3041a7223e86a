//! Mastermind code representation
//!
//! A Code stores its pegs as symbol indices into the alphabet. Symbol `0` is
//! rendered as `A`, symbol `1` as `B`, and so on.

use super::SolverError;
use std::fmt;

/// Largest alphabet a code can be drawn from (`A`..=`Z`)
pub const MAX_COLORS: usize = 26;

/// Longest code supported; peg counts must fit the `u8` feedback fields
pub const MAX_PEGS: usize = 8;

/// A fixed-length sequence of symbols
///
/// The derived ordering is lexicographic over symbol indices, which is the
/// tie-break order used when several guesses score equally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    symbols: Box<[u8]>,
}

impl Code {
    /// Create a code from raw symbol indices
    ///
    /// # Errors
    /// Returns `SolverError::InvalidCode` if the code is empty, longer than
    /// `MAX_PEGS`, or a symbol is outside `0..MAX_COLORS`.
    pub fn new(symbols: impl Into<Vec<u8>>) -> Result<Self, SolverError> {
        let symbols: Vec<u8> = symbols.into();

        if symbols.is_empty() {
            return Err(SolverError::InvalidCode("code has no pegs".to_string()));
        }

        if symbols.len() > MAX_PEGS {
            return Err(SolverError::InvalidCode(format!(
                "code has {} pegs, at most {MAX_PEGS} are supported",
                symbols.len()
            )));
        }

        if let Some(&bad) = symbols.iter().find(|&&s| usize::from(s) >= MAX_COLORS) {
            return Err(SolverError::InvalidCode(format!(
                "symbol index {bad} outside alphabet of {MAX_COLORS}"
            )));
        }

        Ok(Self {
            symbols: symbols.into_boxed_slice(),
        })
    }

    /// Parse a code from letters, e.g. `"AABC"` (case-insensitive)
    ///
    /// # Errors
    /// Returns `SolverError::InvalidCode` on an empty string, non-letter input,
    /// or more than `MAX_PEGS` letters.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::parse("abca").unwrap();
    /// assert_eq!(code.symbols(), &[0, 1, 2, 0]);
    /// assert_eq!(code.to_string(), "ABCA");
    ///
    /// assert!(Code::parse("AB1").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, SolverError> {
        let symbols = text
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_uppercase() as u8 - b'A')
                } else {
                    Err(SolverError::InvalidCode(format!(
                        "'{c}' is not a peg letter in \"{text}\""
                    )))
                }
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Self::new(symbols)
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed code; provided for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Highest symbol index used by this code
    #[must_use]
    pub fn max_symbol(&self) -> u8 {
        self.symbols.iter().copied().max().unwrap_or(0)
    }

    /// Count of each symbol in the code, indexed by symbol
    #[inline]
    pub(crate) fn symbol_counts(&self) -> [u8; MAX_COLORS] {
        let mut counts = [0u8; MAX_COLORS];
        for &s in &*self.symbols {
            counts[usize::from(s)] += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &s in &*self.symbols {
            write!(f, "{}", char::from(b'A' + s))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
