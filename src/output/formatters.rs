//! Formatting utilities for terminal output

use crate::core::{Feedback, PATTERN_COUNT, Pattern, Word};
use colored::Colorize;

/// Guess letters coloured by their feedback
#[must_use]
pub fn colored_guess(guess: &Word, pattern: Pattern) -> String {
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(pattern.symbols())
        .map(|(letter, mark)| {
            let letter = letter.to_string();
            match mark {
                Feedback::Exact => letter.black().on_green().to_string(),
                Feedback::Present => letter.black().on_yellow().to_string(),
                Feedback::Absent => letter.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// `"1 guess"`, `"3 guesses"`
#[must_use]
pub fn guess_count(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar against the most a single guess can yield
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = (PATTERN_COUNT as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
