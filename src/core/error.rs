//! Error types shared by the solver and analyzer

use thiserror::Error;

/// Errors raised when a caller hands the solver malformed input
///
/// Every variant indicates a contract violation by the caller rather than a
/// transient condition, so nothing in the crate retries on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Code length or alphabet does not match the other operand
    #[error("invalid code: {0}")]
    InvalidCode(String),

    /// An operation needed a non-empty set and received an empty one
    #[error("empty domain: {0}")]
    EmptyDomain(&'static str),

    /// A strategy name that no rule answers to
    #[error("unknown strategy '{name}', expected one of: {expected}")]
    UnknownStrategy { name: String, expected: String },

    /// A guess that leaves the whole consistent set in a single cell
    #[error("guess {guess} does not split a consistent set of {size} codes")]
    Stalled { guess: String, size: usize },
}

impl SolverError {
    pub(crate) fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::InvalidCode(format!("expected {expected} pegs, got {got}"))
    }
}
