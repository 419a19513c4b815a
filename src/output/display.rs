//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, entropy_bar, guess_count};
use crate::commands::{AnalysisResult, BenchmarkResult, OpenerRanking};
use crate::solver::GameOutcome;
use crate::solver::entropy::Scoring;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(outcome: &GameOutcome, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        outcome.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in outcome.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            colored_guess(&turn.guess, turn.pattern),
            turn.pattern.to_emoji(),
            turn.pattern.to_wire(&turn.guess).bright_black()
        );

        if verbose {
            println!("  Strategy:   {}", turn.source.label());
            println!(
                "  Candidates: {} → {}",
                turn.candidates_before, turn.candidates_after
            );
            if let Some(score) = turn.score {
                println!("  Score:      {score:.3}");
            }

            // Information actually gained, as opposed to expected
            if turn.candidates_after > 0 {
                let ratio = turn.candidates_before as f64 / turn.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    if outcome.solved {
        println!(
            "{}",
            format!("✅ Solved in {}!", guess_count(outcome.guesses()))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {}", guess_count(outcome.guesses()))
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates ({} patterns)",
        result.metrics.max_partition, result.metrics.distinct_patterns
    );
    if result.is_answer {
        println!("   {}", "Could be the answer itself".green());
    }
}

/// Print the ranked opening pool
pub fn print_opener_ranking(ranking: &OpenerRanking) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST OPENERS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nPool of {} candidates against {} answers\n",
        ranking.pool_size, ranking.total_answers
    );

    for (i, guess) in ranking.ranked.iter().enumerate() {
        let unit = match guess.scoring {
            Scoring::Entropy => "bits",
            Scoring::CoverageProxy => "coverage",
        };
        println!(
            "  {:>3}. {} [{}] {:.3} {unit}",
            i + 1,
            guess.word.text().to_uppercase().bright_white().bold(),
            entropy_bar(guess.score, 20).green(),
            guess.score
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!("   Failed:           {}", format!("{}", result.failed).red());
    }
    if result.errors > 0 {
        println!("   Errors:           {}", format!("{}", result.errors).red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();
    for (guesses, count) in counts {
        let pct = count as f64 / result.total_words.max(1) as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.worst_words.is_empty() {
        println!("\n🐢 {}", "Hardest words:".bright_cyan().bold());
        for (word, guesses) in &result.worst_words {
            println!("   {} ({guesses})", word.text().to_uppercase());
        }
    }
}
