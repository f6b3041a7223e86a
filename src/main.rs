//! Mastermind Solver - CLI
//!
//! Exact evaluation of one-step-ahead Mastermind strategies: every key of the
//! code space is played out and the full guess distribution is reported.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use mastermind_solver::{
    commands::{
        AnalyzeConfig, CompareConfig, PoolChoice, SolveConfig, analyze_strategy,
        print_comparison_statistics, run_comparison, solve_code,
    },
    core::CodeSpace,
    output::{print_analysis_result, print_solve_result},
    solver::{Solver, StrategyType},
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Exact guess distributions for one-step-ahead Mastermind strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of colors (1-26)
    #[arg(short, long, global = true, default_value_t = 6)]
    colors: usize,

    /// Number of pegs (1-8)
    #[arg(short, long, global = true, default_value_t = 4)]
    pegs: usize,

    /// Strategy: worst-case (default), zero-step, shannon-fano, expected-size,
    /// branch-max, refined-branch-max
    #[arg(short, long, global = true, default_value = "worst-case")]
    strategy: String,

    /// Allow guesses that can no longer be the key (pool = whole code space)
    #[arg(short, long, global = true, conflicts_with = "pool")]
    inconsistent: bool,

    /// Guess only from the codes listed in this file, one per line
    #[arg(long, global = true, value_name = "FILE")]
    pool: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess distribution of the selected strategy (default)
    Analyze,

    /// Rank every strategy by expected number of guesses
    Compare {
        /// Run each strategy with and without inconsistent guesses
        #[arg(short, long)]
        both: bool,
    },

    /// Play one game against a key
    Solve {
        /// The key to find, as letters (random if omitted)
        secret: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the guess pool from the `-i` and `--pool` flags
fn load_pool(cli: &Cli, space: CodeSpace) -> Result<PoolChoice> {
    if let Some(path) = &cli.pool {
        let codes = space
            .load_from_file(path)
            .with_context(|| format!("failed to load pool from {}", path.display()))?;
        info!(path = %path.display(), codes = codes.len(), "loaded candidate pool");
        return Ok(PoolChoice::Custom(codes));
    }

    Ok(if cli.inconsistent {
        PoolChoice::AnyCode
    } else {
        PoolChoice::Consistent
    })
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    let space = CodeSpace::new(cli.colors, cli.pegs).context("invalid code space")?;
    let pool = load_pool(&cli, space)?;

    match cli.command.take().unwrap_or(Commands::Analyze) {
        Commands::Analyze => run_analyze_command(&cli.strategy, space, pool),
        Commands::Compare { both } => run_compare_command(space, pool, both),
        Commands::Solve { secret } => {
            run_solve_command(&cli.strategy, space, pool, secret.as_deref(), cli.verbose > 0)
        }
    }
}

fn run_analyze_command(strategy: &str, space: CodeSpace, pool: PoolChoice) -> Result<()> {
    let result = analyze_strategy(AnalyzeConfig::new(space, strategy).with_pool(pool))
        .with_context(|| format!("analysis of '{strategy}' failed"))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_compare_command(space: CodeSpace, pool: PoolChoice, both: bool) -> Result<()> {
    let pools = if both && pool == PoolChoice::Consistent {
        vec![PoolChoice::Consistent, PoolChoice::AnyCode]
    } else if both {
        vec![PoolChoice::Consistent, pool]
    } else {
        vec![pool]
    };

    println!(
        "\nComparing {} strategies over {} keys...",
        StrategyType::NAMES.len(),
        space.size()
    );

    let config = CompareConfig::new(space)
        .with_pools(pools)
        .with_progress(true);
    let stats = run_comparison(&config).context("comparison failed")?;
    print_comparison_statistics(&stats);
    Ok(())
}

fn run_solve_command(
    strategy_name: &str,
    space: CodeSpace,
    pool: PoolChoice,
    secret: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let secret = secret
        .map(|text| space.parse_code(text))
        .transpose()
        .context("invalid secret")?;

    let strategy = StrategyType::from_name(strategy_name, space, pool.into_pool(space))?;
    let codes = space.generate();
    let solver = Solver::new(strategy, &codes);

    let result = solve_code(SolveConfig::new(secret), &solver)?;
    print_solve_result(&result, verbose);
    Ok(())
}
