//! Code space configuration and enumeration
//!
//! A `CodeSpace` is the one piece of configuration the solver needs: how many
//! colors each peg may take and how many pegs a code has. It is passed
//! explicitly wherever codes are generated or validated.

use super::{Code, Feedback, SolverError, MAX_COLORS, MAX_PEGS};
use std::fs;
use std::path::Path;

/// The game parameters defining the set of all candidate keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeSpace {
    colors: u8,
    pegs: u8,
}

impl CodeSpace {
    /// The classic game: six colors, four pegs (1296 codes)
    pub const CLASSIC: Self = Self { colors: 6, pegs: 4 };

    /// Create a new code space
    ///
    /// # Errors
    /// Returns `SolverError::InvalidCode` unless `1 <= colors <= 26` and
    /// `1 <= pegs <= 8`.
    pub fn new(colors: usize, pegs: usize) -> Result<Self, SolverError> {
        if !(1..=MAX_COLORS).contains(&colors) {
            return Err(SolverError::InvalidCode(format!(
                "colors must be between 1 and {MAX_COLORS}, got {colors}"
            )));
        }
        if !(1..=MAX_PEGS).contains(&pegs) {
            return Err(SolverError::InvalidCode(format!(
                "pegs must be between 1 and {MAX_PEGS}, got {pegs}"
            )));
        }

        Ok(Self {
            colors: colors as u8,
            pegs: pegs as u8,
        })
    }

    #[inline]
    #[must_use]
    pub const fn colors(self) -> usize {
        self.colors as usize
    }

    #[inline]
    #[must_use]
    pub const fn pegs(self) -> usize {
        self.pegs as usize
    }

    /// Number of codes in the space (`colors ^ pegs`)
    #[must_use]
    pub fn size(self) -> usize {
        self.colors().pow(u32::from(self.pegs))
    }

    /// Feedback received by a correct guess in this space
    #[inline]
    #[must_use]
    pub const fn correct_feedback(self) -> Feedback {
        Feedback::correct(self.pegs)
    }

    /// Enumerate every code in lexicographic order
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::CodeSpace;
    ///
    /// let space = CodeSpace::new(2, 2).unwrap();
    /// let codes: Vec<String> = space.generate().iter().map(ToString::to_string).collect();
    /// assert_eq!(codes, ["AA", "AB", "BA", "BB"]);
    /// ```
    #[must_use]
    pub fn generate(self) -> Vec<Code> {
        let mut codes = Vec::with_capacity(self.size());
        let mut current = vec![0u8; self.pegs()];

        loop {
            codes.push(Code::from_valid(current.clone()));

            // Odometer increment from the last peg
            let mut position = self.pegs();
            loop {
                if position == 0 {
                    return codes;
                }
                position -= 1;
                current[position] += 1;
                if current[position] < self.colors {
                    break;
                }
                current[position] = 0;
            }
        }
    }

    /// Check that `code` belongs to this space
    ///
    /// # Errors
    /// Returns `SolverError::InvalidCode` on a length or alphabet mismatch.
    pub fn validate(self, code: &Code) -> Result<(), SolverError> {
        if code.len() != self.pegs() {
            return Err(SolverError::length_mismatch(self.pegs(), code.len()));
        }
        if code.max_symbol() >= self.colors {
            return Err(SolverError::InvalidCode(format!(
                "{code} uses a color outside the {} available",
                self.colors
            )));
        }
        Ok(())
    }

    /// Parse a code from letters and check it belongs to this space
    ///
    /// # Errors
    /// Returns `SolverError::InvalidCode` if the text is not a code of this space.
    pub fn parse_code(self, text: &str) -> Result<Code, SolverError> {
        let code = Code::parse(text)?;
        self.validate(&code)?;
        Ok(code)
    }

    /// Load a list of codes from a file, one per line
    ///
    /// Blank lines are skipped. Every other line must be a code of this space.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or an `InvalidData`
    /// error naming the first line that is not a valid code.
    pub fn load_from_file<P: AsRef<Path>>(self, path: P) -> std::io::Result<Vec<Code>> {
        let content = fs::read_to_string(path)?;
        self.parse_lines(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    fn parse_lines(self, content: &str) -> Result<Vec<Code>, SolverError> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.parse_code(line))
            .collect()
    }
}

impl Default for CodeSpace {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl Code {
    /// Construct from symbols the caller has already range-checked
    pub(crate) fn from_valid(symbols: Vec<u8>) -> Self {
        debug_assert!(symbols.iter().all(|&s| usize::from(s) < MAX_COLORS));
        Self::new(symbols).unwrap_or_else(|_| unreachable!("symbols are range-checked"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_sizes() {
        assert_eq!(CodeSpace::CLASSIC.size(), 1296);
        assert_eq!(CodeSpace::new(4, 3).unwrap().size(), 64);
        assert_eq!(CodeSpace::new(2, 1).unwrap().size(), 2);
    }

    #[test]
    fn space_rejects_bad_parameters() {
        assert!(CodeSpace::new(0, 4).is_err());
        assert!(CodeSpace::new(27, 4).is_err());
        assert!(CodeSpace::new(6, 0).is_err());
        assert!(CodeSpace::new(6, 9).is_err());
    }

    #[test]
    fn generate_is_complete_sorted_and_unique() {
        let space = CodeSpace::new(3, 3).unwrap();
        let codes = space.generate();

        assert_eq!(codes.len(), space.size());
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(codes.iter().all(|c| space.validate(c).is_ok()));
    }

    #[test]
    fn generate_single_peg() {
        let codes = CodeSpace::new(2, 1).unwrap().generate();
        assert_eq!(codes, vec![Code::parse("A").unwrap(), Code::parse("B").unwrap()]);
    }

    #[test]
    fn parse_code_checks_alphabet_and_length() {
        let space = CodeSpace::new(4, 3).unwrap();
        assert!(space.parse_code("ABD").is_ok());
        assert!(matches!(space.parse_code("ABE"), Err(SolverError::InvalidCode(_))));
        assert!(matches!(space.parse_code("ABCD"), Err(SolverError::InvalidCode(_))));
    }

    #[test]
    fn correct_feedback_matches_pegs() {
        assert_eq!(CodeSpace::CLASSIC.correct_feedback(), Feedback::new(4, 0));
    }

    #[test]
    fn parse_lines_skips_blank_lines() {
        let space = CodeSpace::new(3, 2).unwrap();
        let codes = space.parse_lines("AB\n\n  CA \nBB\n").unwrap();
        assert_eq!(codes.len(), 3);
        assert_eq!(codes[1].to_string(), "CA");
    }

    #[test]
    fn parse_lines_rejects_foreign_codes() {
        let space = CodeSpace::new(3, 2).unwrap();
        assert!(space.parse_lines("AB\nZZ\n").is_err());
    }
}
