//! Mastermind guess selection
//!
//! This module turns feedback-histogram scorers into strategies and plays
//! strategies out against a secret key.

mod engine;
pub mod generalize;
pub mod partition;
pub mod scoring;
pub mod strategy;

pub use engine::Solver;
pub use generalize::{CandidatePool, Generalized, select_best_guess};
pub use partition::{Histogram, count_by, partition_by};
pub use scoring::{
    BranchMax, ExpectedSize, RefinedBranchMax, Scorer, ScorerKind, ShannonFano, WorstCase,
};
pub use strategy::{Strategy, StrategyType, ZeroStep};
