//! Shannon entropy calculation for feedback partitions
//!
//! A guess splits the reference space into cells, one per feedback pattern.
//! Entropy, expected remaining size and worst case are all read off the same
//! partition.

use crate::core::{ALPHABET, PATTERN_COUNT, Pattern, Word, letter_index};
use crate::wordlists::WordWeights;

/// One non-empty cell of a partition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub pattern: Pattern,
    /// Number of words in the cell
    pub count: usize,
    /// Summed weight of the words (equals `count` when unweighted)
    pub mass: f64,
}

/// How a guess partitions a reference space by feedback pattern
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    cells: Vec<Cell>,
}

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback patterns
    pub distinct_patterns: usize,
}

impl Partition {
    /// Partition `space` by the pattern each word produces against `guess`
    ///
    /// Cells come out in pattern order.
    #[must_use]
    pub fn compute(guess: &Word, space: &[Word], weights: Option<&WordWeights>) -> Self {
        let mut counts = [0usize; PATTERN_COUNT];
        let mut masses = [0f64; PATTERN_COUNT];

        for answer in space {
            let idx = usize::from(Pattern::calculate(guess, answer).value());
            counts[idx] += 1;
            masses[idx] += weights.map_or(1.0, |w| w.weight(answer));
        }

        let cells = counts
            .iter()
            .zip(masses.iter())
            .enumerate()
            .filter(|&(_, (&count, _))| count > 0)
            .map(|(idx, (&count, &mass))| Cell {
                pattern: Pattern::new(idx as u8),
                count,
                mass,
            })
            .collect();

        Self { cells }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Total number of words partitioned
    #[must_use]
    pub fn total(&self) -> usize {
        self.cells.iter().map(|c| c.count).sum()
    }

    /// Number of distinct feedback patterns
    #[must_use]
    pub fn distinct_patterns(&self) -> usize {
        self.cells.len()
    }

    /// Size of the largest cell
    #[must_use]
    pub fn max_partition(&self) -> usize {
        self.cells.iter().map(|c| c.count).max().unwrap_or(0)
    }

    /// True when every word lands in its own cell
    #[must_use]
    pub fn is_fully_disambiguating(&self) -> bool {
        self.cells.iter().all(|c| c.count == 1)
    }

    /// Shannon entropy of the cell masses
    ///
    /// H = -Σ p * log₂(p)
    ///
    /// # Properties
    /// - Returns 0.0 for certain outcome (one pattern with p=1)
    /// - Maximized for uniform distribution
    /// - Always in range [0, log₂(n)] for n patterns
    #[must_use]
    pub fn entropy(&self) -> f64 {
        shannon_entropy(self.cells.iter().map(|c| c.mass))
    }

    /// Expected cell size, weighting each cell by its probability
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        let total: f64 = self.cells.iter().map(|c| c.mass).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.cells
            .iter()
            .map(|c| c.mass / total * c.count as f64)
            .sum()
    }

    #[must_use]
    pub fn metrics(&self) -> GuessMetrics {
        GuessMetrics {
            entropy: self.entropy(),
            expected_remaining: self.expected_remaining(),
            max_partition: self.max_partition(),
            distinct_patterns: self.distinct_patterns(),
        }
    }
}

/// Shannon entropy (bits) of a distribution given by non-negative masses
///
/// # Examples
/// ```
/// use codebreaker::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([25.0, 25.0, 25.0, 25.0]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(masses: impl IntoIterator<Item = f64> + Clone) -> f64 {
    let total: f64 = masses.clone().into_iter().sum();

    if total <= 0.0 {
        return 0.0;
    }

    masses
        .into_iter()
        .filter(|&mass| mass > 0.0)
        .map(|mass| {
            let p = mass / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate Shannon entropy for a guess against a space, unweighted
///
/// # Examples
/// ```
/// use codebreaker::core::Word;
/// use codebreaker::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("spade").unwrap();
/// let space = vec![Word::new("spade").unwrap(), Word::new("mixed").unwrap()];
///
/// let entropy = calculate_entropy(&guess, &space);
/// assert!((entropy - 1.0).abs() < 0.001);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, space: &[Word]) -> f64 {
    Partition::compute(guess, space, None).entropy()
}

/// Per-letter coverage of a space: how much answer mass contains each letter
///
/// Each answer contributes its weight once per distinct letter it contains.
#[must_use]
pub fn letter_coverage(space: &[Word], weights: Option<&WordWeights>) -> [f64; ALPHABET] {
    let mut coverage = [0f64; ALPHABET];
    for answer in space {
        let weight = weights.map_or(1.0, |w| w.weight(answer));
        for (letter, &count) in answer.letter_counts().iter().enumerate() {
            if count > 0 {
                coverage[letter] += weight;
            }
        }
    }
    coverage
}

/// Coverage score of a guess: summed coverage of its distinct letters
///
/// This is a cheap approximation used when exact entropy over a large pool is
/// too expensive. It is not an entropy and is not measured in bits.
#[must_use]
pub fn coverage_score(guess: &Word, coverage: &[f64; ALPHABET]) -> f64 {
    let mut seen = [false; ALPHABET];
    let mut score = 0.0;
    for &ch in guess.chars() {
        let idx = letter_index(ch);
        if !seen[idx] {
            seen[idx] = true;
            score += coverage[idx];
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let entropy = shannon_entropy([1.0, 1.0, 1.0, 1.0]);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        assert!(shannon_entropy([10.0]).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_is_lower() {
        let uniform = shannon_entropy([25.0, 25.0, 25.0, 25.0]);
        let skewed = shannon_entropy([97.0, 1.0, 1.0, 1.0]);
        assert!(uniform > skewed);
    }

    #[test]
    fn shannon_entropy_empty() {
        let empty: [f64; 0] = [];
        assert!(shannon_entropy(empty).abs() < f64::EPSILON);
    }

    #[test]
    fn partition_counts_sum_to_space() {
        let space = words_from_slice(&["allot", "below", "lobby", "mixed"]);
        let partition = Partition::compute(&w("allot"), &space, None);

        assert_eq!(partition.total(), 4);
        // allot, below, lobby, mixed all score differently against ALLOT
        assert_eq!(partition.distinct_patterns(), 4);
        assert!(partition.is_fully_disambiguating());
        assert!((partition.entropy() - 2.0).abs() < 0.001);
    }

    #[test]
    fn partition_all_same_pattern_has_zero_entropy() {
        let space = words_from_slice(&["aaaaa", "bbbbb", "ccccc"]);
        let partition = Partition::compute(&w("zzzzz"), &space, None);

        assert_eq!(partition.distinct_patterns(), 1);
        assert_eq!(partition.max_partition(), 3);
        assert!(partition.entropy().abs() < 0.001);
        assert!((partition.expected_remaining() - 3.0).abs() < 0.001);
    }

    #[test]
    fn weighted_partition_shifts_entropy() {
        let space = words_from_slice(&["spade", "mixed"]);
        let mut weights = WordWeights::new();
        weights.insert(w("mixed"), 3.0);

        let unweighted = Partition::compute(&w("spade"), &space, None);
        let weighted = Partition::compute(&w("spade"), &space, Some(&weights));

        assert!((unweighted.entropy() - 1.0).abs() < 0.001);
        assert!(weighted.entropy() < unweighted.entropy());
        // counts are unaffected by weights
        assert_eq!(weighted.max_partition(), 1);
    }

    #[test]
    fn metrics_are_consistent() {
        let space = words_from_slice(&["spade", "space", "spark", "mixed"]);
        let metrics = Partition::compute(&w("spade"), &space, None).metrics();

        assert!(metrics.entropy >= 0.0);
        assert!(metrics.entropy <= (metrics.distinct_patterns as f64).log2() + 1e-9);
        assert!(metrics.max_partition <= space.len());
        assert!(metrics.expected_remaining >= 1.0);
    }

    #[test]
    fn coverage_counts_each_letter_once_per_word() {
        let space = words_from_slice(&["lobby", "below"]);
        let coverage = letter_coverage(&space, None);

        assert!((coverage[letter_index(b'b')] - 2.0).abs() < f64::EPSILON);
        assert!((coverage[letter_index(b'y')] - 1.0).abs() < f64::EPSILON);

        // repeated letters in the guess only count once
        let once = coverage_score(&w("bxxxx"), &coverage);
        let twice = coverage_score(&w("bbxxx"), &coverage);
        assert!((once - twice).abs() < f64::EPSILON);
    }
}
