//! Word solving command
//!
//! Plays one game against a known secret and returns every turn.

use crate::core::Word;
use crate::solver::{GameOutcome, Solver};
use anyhow::{Context, Result, bail};

/// Solve `target` with `solver`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - The target is not among the solver's possible answers
/// - A turn fails, e.g. no candidate guess is available
pub fn solve_word(target: &str, solver: &Solver<'_>) -> Result<GameOutcome> {
    let answer = Word::new(target).with_context(|| format!("invalid target word {target:?}"))?;

    if !solver.answers().contains(&answer) {
        bail!("{answer} is not among the {} possible answers", solver.answers().len());
    }

    let outcome = solver
        .play(&answer)
        .with_context(|| format!("solving {answer}"))?;
    Ok(outcome)
}
