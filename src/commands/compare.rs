//! Compare strategies - every rule over the same code space
//!
//! Runs the exact analysis for each strategy (and each guess pool) and ranks
//! them by expected number of guesses.

use super::analyze::{AnalysisResult, AnalyzeConfig, PoolChoice, analyze_strategy};
use crate::core::{CodeSpace, SolverError};
use crate::output::display::print_distribution;
use crate::output::formatters::progress_bar;
use crate::solver::StrategyType;
use colored::Colorize;
use std::time::{Duration, Instant};

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub space: CodeSpace,
    pub strategies: Vec<String>,
    pub pools: Vec<PoolChoice>,
    pub show_progress: bool,
}

impl CompareConfig {
    /// Every registered strategy, guessing from consistent codes only
    #[must_use]
    pub fn new(space: CodeSpace) -> Self {
        Self {
            space,
            strategies: StrategyType::NAMES.iter().map(ToString::to_string).collect(),
            pools: vec![PoolChoice::Consistent],
            show_progress: false,
        }
    }

    #[must_use]
    pub fn with_pools(mut self, pools: Vec<PoolChoice>) -> Self {
        self.pools = pools;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// Ranked results of a comparison run
#[derive(Debug)]
pub struct ComparisonStatistics {
    pub space: CodeSpace,
    /// Best first: lowest expected guesses, then lowest worst case
    pub ranked: Vec<AnalysisResult>,
    pub total_time: Duration,
}

impl ComparisonStatistics {
    #[must_use]
    pub fn best(&self) -> Option<&AnalysisResult> {
        self.ranked.first()
    }
}

/// Analyze every configured strategy and pool combination
///
/// `zero-step` ignores the pool, so it is run once.
///
/// # Errors
///
/// Returns the first analysis error (unknown strategy, bad pool, ...).
pub fn run_comparison(config: &CompareConfig) -> Result<ComparisonStatistics, SolverError> {
    let runs: Vec<(&str, &PoolChoice)> = config
        .strategies
        .iter()
        .flat_map(|name| {
            let pools = if name == "zero-step" {
                &config.pools[..config.pools.len().min(1)]
            } else {
                &config.pools[..]
            };
            pools.iter().map(move |pool| (name.as_str(), pool))
        })
        .collect();

    let pb = progress_bar(runs.len() as u64, config.show_progress);
    let start = Instant::now();
    let mut ranked = Vec::with_capacity(runs.len());

    for (name, pool) in runs {
        pb.set_message(format!("{name} ({})", pool.label()));
        let analysis =
            analyze_strategy(AnalyzeConfig::new(config.space, name).with_pool(pool.clone()))?;
        ranked.push(analysis);
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    ranked.sort_by(|a, b| {
        a.expected_guesses
            .total_cmp(&b.expected_guesses)
            .then(a.max_guesses.cmp(&b.max_guesses))
            .then_with(|| a.strategy.cmp(&b.strategy))
    });

    Ok(ComparisonStatistics {
        space: config.space,
        ranked,
        total_time: start.elapsed(),
    })
}

/// Print the ranking table and the winner's distribution
pub fn print_comparison_statistics(stats: &ComparisonStatistics) {
    println!("\n{}", "═".repeat(78));
    println!(
        " Strategy Comparison: {} colors × {} pegs ({} keys) ",
        stats.space.colors(),
        stats.space.pegs(),
        stats.space.size()
    );
    println!("{}", "═".repeat(78));

    println!(
        "\n  {:>2}  {:<20} {:<12} {:<8} {:>9} {:>5} {:>9}",
        "#", "Strategy", "Guesses", "First", "Expected", "Max", "Time"
    );
    println!("  {}", "─".repeat(74).bright_black());

    for (rank, result) in stats.ranked.iter().enumerate() {
        let expected = format!("{:9.4}", result.expected_guesses);
        let expected = if rank == 0 {
            expected.bright_green().bold()
        } else {
            expected.normal()
        };

        println!(
            "  {:>2}  {:<20} {:<12} {:<8} {} {:>5} {:>8.2}s",
            rank + 1,
            result.strategy,
            result.pool,
            result.first_guess.to_string(),
            expected,
            result.max_guesses,
            result.duration.as_secs_f64()
        );
    }

    if let Some(best) = stats.best() {
        println!(
            "\n✨ {} {} ({})",
            "Best:".green().bold(),
            best.strategy.bright_green(),
            best.pool
        );
        print_distribution(&best.distribution);
    }

    println!(
        "\n  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
}
