//! Benchmark command
//!
//! Plays one game per target word in parallel, sharing a single solver.

use crate::core::Word;
use crate::solver::{GameOutcome, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Games aborted by a turn error (e.g. inconsistent feedback)
    pub errors: usize,
    /// Averaged over solved games only
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved games
    pub distribution: FxHashMap<usize, usize>,
    /// Unsolved words, then the slowest solves, at most ten
    pub worst_words: Vec<(Word, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

/// Run benchmark on a set of target words
pub fn run_benchmark(solver: &Solver<'_>, target_words: &[Word], show_progress: bool) -> BenchmarkResult {
    let start = Instant::now();
    let bar = progress_bar(target_words.len(), show_progress);

    // computed up front so every game reuses it
    if let Err(error) = solver.opening() {
        log::warn!("no opening guess: {error}");
    }

    let outcomes: Vec<Option<GameOutcome>> = target_words
        .par_iter()
        .map(|target| {
            let outcome = solver
                .play(target)
                .inspect_err(|error| log::warn!("{target}: {error}"))
                .ok();
            bar.inc(1);
            outcome
        })
        .collect();

    bar.finish_with_message("Complete!");
    summarize(&outcomes, start.elapsed())
}

fn summarize(outcomes: &[Option<GameOutcome>], duration: Duration) -> BenchmarkResult {
    let played: Vec<&GameOutcome> = outcomes.iter().flatten().collect();
    let solved: Vec<&GameOutcome> = played.iter().copied().filter(|o| o.solved).collect();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for outcome in &solved {
        *distribution.entry(outcome.guesses()).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|o| o.guesses()).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut worst_words: Vec<(bool, Word, usize)> = played
        .iter()
        .map(|o| (o.solved, o.answer, o.guesses()))
        .collect();
    worst_words.sort_by_key(|&(solved, word, guesses)| (solved, Reverse(guesses), word));
    worst_words.truncate(10);

    let total_words = outcomes.len();
    BenchmarkResult {
        total_words,
        solved: solved.len(),
        failed: played.len() - solved.len(),
        errors: total_words - played.len(),
        average_guesses,
        min_guesses: solved.iter().map(|o| o.guesses()).min().unwrap_or(0),
        max_guesses: solved.iter().map(|o| o.guesses()).max().unwrap_or(0),
        distribution,
        worst_words: worst_words
            .into_iter()
            .map(|(_, word, guesses)| (word, guesses))
            .collect(),
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
