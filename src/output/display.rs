//! Display functions for command results

use super::formatters::{distribution_bar, feedback_pegs};
use crate::analysis::GuessDistribution;
use crate::commands::{AnalysisResult, SolveResult};
use colored::Colorize;

const BAR_WIDTH: usize = 40;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let pegs = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let guess = if step.consistent {
            step.guess.to_string().normal()
        } else {
            step.guess.to_string().bright_black()
        };
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            guess,
            feedback_pegs(step.feedback, pegs),
            step.feedback.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if !step.consistent {
                println!("  {}", "(probe: could not have been the key)".bright_black());
            }
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!("  Reduction:  {reduction:.1}x");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a strategy analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "STRATEGY ANALYSIS:".bright_cyan().bold(),
        result.strategy.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} colors × {} pegs ({} keys), guesses from {}",
        result.space.colors(),
        result.space.pegs(),
        result.distribution.total(),
        result.pool
    );
    println!("   First guess:      {}", result.first_guess.to_string().bold());
    println!(
        "   Expected guesses: {}",
        format!("{:.4}", result.expected_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    print_distribution(&result.distribution);
}

/// Print one bar per guess count
pub fn print_distribution(distribution: &GuessDistribution) {
    let total = distribution.total();
    let max_count = distribution.iter().map(|(_, n)| n).max().unwrap_or(1);

    for (guesses, count) in distribution.iter() {
        let percentage = count as f64 / total as f64 * 100.0;
        let bar = distribution_bar(count, max_count, BAR_WIDTH);
        let (filled, empty) = bar.split_at(bar.rfind('█').map_or(0, |i| i + '█'.len_utf8()));

        println!(
            "  {guesses:2} guesses: {}{} {count:6} ({percentage:5.1}%)",
            filled.green(),
            empty.bright_black()
        );
    }
}
