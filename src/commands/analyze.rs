//! Word analysis command
//!
//! Scores one guess against the full set of possible answers.

use crate::core::Word;
use crate::solver::entropy::GuessMetrics;
use crate::solver::{SearchSpace, Solver};
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// Whether the word could itself be the answer
    pub is_answer: bool,
    pub total_candidates: usize,
}

impl AnalysisResult {
    /// Expected shrink factor, `2^entropy`
    #[must_use]
    pub fn expected_reduction(&self) -> f64 {
        self.metrics.entropy.exp2()
    }
}

/// Analyze a guessable word against all possible answers
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The word is not in the guessable vocabulary
pub fn analyze_word(word: &str, solver: &Solver<'_>) -> Result<AnalysisResult> {
    let guess = Word::new(word).with_context(|| format!("invalid word {word:?}"))?;

    if !solver.vocabulary().contains(&guess) {
        bail!("word '{guess}' not in word list");
    }

    let space = SearchSpace::new(solver.answers());
    let metrics = solver.ranker().partition(&guess, &space).metrics();

    Ok(AnalysisResult {
        word: guess,
        metrics,
        is_answer: space.contains(&guess),
        total_candidates: space.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analyze_valid_word() {
        let words = words_from_slice(&["allot", "below", "lobby", "mixed"]);
        let solver = Solver::new(&words, &words, SolverConfig::default());

        let result = analyze_word("allot", &solver).unwrap();

        assert_eq!(result.word.text(), "allot");
        assert!((result.metrics.entropy - 2.0).abs() < 1e-9);
        assert!((result.expected_reduction() - 4.0).abs() < 1e-9);
        assert_eq!(result.metrics.max_partition, 1);
        assert!(result.is_answer);
        assert_eq!(result.total_candidates, 4);
    }

    #[test]
    fn analyze_invalid_word() {
        let words = words_from_slice(&["allot", "below", "lobby", "mixed"]);
        let solver = Solver::new(&words, &words, SolverConfig::default());

        assert!(analyze_word("zzzzz", &solver).is_err());
        assert!(analyze_word("al1ot", &solver).is_err());
    }

    #[test]
    fn entropy_properties() {
        let all = words_from_slice(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let answers = words_from_slice(&["irate", "crate", "grate", "trace"]);
        let solver = Solver::new(&all, &answers, SolverConfig::default());

        let result = analyze_word("slate", &solver).unwrap();

        assert!(!result.is_answer);
        assert!(result.metrics.entropy >= 0.0);
        assert!(result.metrics.entropy <= (answers.len() as f64).log2());
        assert!(result.metrics.expected_remaining >= 1.0);
        assert!(result.metrics.expected_remaining <= answers.len() as f64);
    }
}
