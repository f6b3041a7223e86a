//! Command implementations

pub mod analyze;
pub mod compare;
pub mod solve;

pub use analyze::{AnalysisResult, AnalyzeConfig, PoolChoice, analyze_strategy};
pub use compare::{
    CompareConfig, ComparisonStatistics, print_comparison_statistics, run_comparison,
};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code};
