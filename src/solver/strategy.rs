//! Guess selection strategies
//!
//! Defines the Strategy trait and the runtime-selectable strategy wrapper.

use super::generalize::{CandidatePool, Generalized};
use super::scoring::ScorerKind;
use crate::core::{Code, CodeSpace, SolverError};

/// A strategy for selecting the next guess from the consistent set
///
/// Strategies are pure: the same consistent set always yields the same guess.
/// They must be `Sync` so the tree analyzer can evaluate subtrees in parallel.
pub trait Strategy: Sync {
    /// Select the next guess given the codes still consistent with all feedback
    ///
    /// # Errors
    /// Returns `SolverError::EmptyDomain` if `consistent` is empty, or
    /// `SolverError::InvalidCode` if the codes are malformed.
    fn select_guess(&self, consistent: &[Code]) -> Result<Code, SolverError>;
}

impl<T: Strategy + ?Sized> Strategy for &T {
    fn select_guess(&self, consistent: &[Code]) -> Result<Code, SolverError> {
        (**self).select_guess(consistent)
    }
}

/// Zero-step baseline: guess the first consistent code without scoring
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroStep;

impl Strategy for ZeroStep {
    fn select_guess(&self, consistent: &[Code]) -> Result<Code, SolverError> {
        consistent
            .first()
            .cloned()
            .ok_or(SolverError::EmptyDomain("consistent set"))
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// First consistent code, no lookahead
    ZeroStep(ZeroStep),
    /// One-step-ahead scoring rule over a candidate pool
    Scored(Generalized<ScorerKind>),
}

impl Strategy for StrategyType {
    fn select_guess(&self, consistent: &[Code]) -> Result<Code, SolverError> {
        match self {
            Self::ZeroStep(s) => s.select_guess(consistent),
            Self::Scored(s) => s.select_guess(consistent),
        }
    }
}

impl StrategyType {
    /// Every strategy name accepted by `from_name`
    pub const NAMES: [&'static str; 6] = [
        "zero-step",
        "worst-case",
        "shannon-fano",
        "expected-size",
        "branch-max",
        "refined-branch-max",
    ];

    /// Create strategy from name string
    ///
    /// Scored strategies guess from `pool`; the zero-step baseline ignores it.
    ///
    /// # Errors
    /// Returns `SolverError::UnknownStrategy` if the name is unknown, or any
    /// error from building the generalized strategy.
    pub fn from_name(
        name: &str,
        space: CodeSpace,
        pool: CandidatePool,
    ) -> Result<Self, SolverError> {
        if name == "zero-step" {
            return Ok(Self::ZeroStep(ZeroStep));
        }

        let scorer =
            ScorerKind::from_name(name, space).ok_or_else(|| SolverError::UnknownStrategy {
                name: name.to_string(),
                expected: Self::NAMES.join(", "),
            })?;

        Ok(Self::Scored(Generalized::for_space(pool, scorer, space)?))
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ZeroStep(_) => "zero-step",
            Self::Scored(s) => s.scorer().name(),
        }
    }

    /// Whether this strategy may guess codes outside the consistent set
    #[must_use]
    pub fn allows_inconsistent(&self) -> bool {
        matches!(self, Self::Scored(s) if matches!(s.pool(), CandidatePool::Fixed(_)))
    }
}
