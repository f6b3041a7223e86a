//! Strategy analysis command
//!
//! Computes the exact guess distribution of one strategy over a code space.

use crate::analysis::{GuessDistribution, summarize};
use crate::core::{Code, CodeSpace, SolverError};
use crate::solver::{CandidatePool, Strategy, StrategyType};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Where a strategy may draw its guesses from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PoolChoice {
    /// Only codes still consistent with the feedback
    #[default]
    Consistent,
    /// Any code in the space
    AnyCode,
    /// An explicit list of codes
    Custom(Vec<Code>),
}

impl PoolChoice {
    /// Resolve into the candidate pool for `space`
    #[must_use]
    pub fn into_pool(self, space: CodeSpace) -> CandidatePool {
        match self {
            Self::Consistent => CandidatePool::Unrestricted,
            Self::AnyCode => CandidatePool::Fixed(space.generate()),
            Self::Custom(codes) => CandidatePool::Fixed(codes),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Consistent => "consistent",
            Self::AnyCode => "any code",
            Self::Custom(_) => "custom pool",
        }
    }
}

/// Configuration for analyzing a strategy
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub space: CodeSpace,
    pub strategy: String,
    pub pool: PoolChoice,
}

impl AnalyzeConfig {
    #[must_use]
    pub fn new(space: CodeSpace, strategy: impl Into<String>) -> Self {
        Self {
            space,
            strategy: strategy.into(),
            pool: PoolChoice::Consistent,
        }
    }

    #[must_use]
    pub fn with_pool(mut self, pool: PoolChoice) -> Self {
        self.pool = pool;
        self
    }
}

/// Result of analyzing a strategy
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub strategy: String,
    pub space: CodeSpace,
    pub pool: &'static str,
    pub first_guess: Code,
    pub distribution: GuessDistribution,
    pub expected_guesses: f64,
    pub max_guesses: usize,
    pub duration: Duration,
}

/// Analyze a strategy over every key of the configured space
///
/// # Errors
///
/// Returns an error if:
/// - The strategy name is unknown
/// - A custom pool is empty or holds codes of the wrong length
/// - The analysis itself fails (see `summarize`)
pub fn analyze_strategy(config: AnalyzeConfig) -> Result<AnalysisResult, SolverError> {
    let pool_label = config.pool.label();
    let strategy = StrategyType::from_name(
        &config.strategy,
        config.space,
        config.pool.into_pool(config.space),
    )?;
    let codes = config.space.generate();

    info!(
        strategy = strategy.name(),
        pool = pool_label,
        keys = codes.len(),
        "analyzing strategy"
    );

    let start = Instant::now();
    let first_guess = strategy.select_guess(&codes)?;
    let distribution = summarize(&strategy, &codes)?;
    let duration = start.elapsed();

    let expected_guesses = distribution.expected_guesses()?;
    let max_guesses = distribution.max_guesses().unwrap_or(0);

    debug!(
        %distribution,
        expected_guesses,
        elapsed_s = duration.as_secs_f64(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        strategy: strategy.name().to_string(),
        space: config.space,
        pool: pool_label,
        first_guess,
        distribution,
        expected_guesses,
        max_guesses,
        duration,
    })
}
