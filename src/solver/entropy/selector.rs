//! Entropy-based guess ranking
//!
//! Selects the guess that maximizes expected information gain against a
//! reference space. Ties go to a guess that is itself still possible, then to
//! the lexicographically smallest word, so repeated runs agree.

use super::cache::PartitionCache;
use super::calculator::{Partition, coverage_score, letter_coverage};
use crate::core::Word;
use crate::solver::search_space::SearchSpace;
use crate::wordlists::WordWeights;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// Scores closer than this are treated as equal
const SCORE_EPSILON: f64 = 1e-9;

/// Which measure produced a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scoring {
    /// Exact Shannon entropy in bits
    Entropy,
    /// Letter-coverage approximation (not in bits)
    CoverageProxy,
}

/// A guess together with the score that selected it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub word: Word,
    pub score: f64,
    pub scoring: Scoring,
    /// Whether the guess is itself a member of the reference space
    pub in_space: bool,
}

impl RankedGuess {
    /// Ranking order: `Greater` means `self` is the better guess
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        if (self.score - other.score).abs() > SCORE_EPSILON {
            return self.score.total_cmp(&other.score);
        }
        self.in_space
            .cmp(&other.in_space)
            .then_with(|| other.word.cmp(&self.word))
    }
}

/// Ranks candidate guesses against a reference space
///
/// Partitions go through the shared [`PartitionCache`]; misses are computed
/// in parallel.
#[derive(Debug, Clone, Copy)]
pub struct EntropyRanker<'a> {
    cache: &'a PartitionCache,
    weights: Option<&'a WordWeights>,
    pool_cap: usize,
}

impl<'a> EntropyRanker<'a> {
    /// Create a ranker; pools larger than `pool_cap` fall back to the coverage proxy
    #[must_use]
    pub const fn new(
        cache: &'a PartitionCache,
        weights: Option<&'a WordWeights>,
        pool_cap: usize,
    ) -> Self {
        Self {
            cache,
            weights,
            pool_cap,
        }
    }

    /// Select the best guess from `pool`
    ///
    /// Uses exact entropy unless the pool exceeds the configured cap, in which
    /// case the letter-coverage approximation is used instead.
    /// Returns `None` if either the pool or the space is empty.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::solver::entropy::{EntropyRanker, PartitionCache};
    /// use codebreaker::solver::SearchSpace;
    /// use codebreaker::wordlists::loader::words_from_slice;
    ///
    /// let space = SearchSpace::new(&words_from_slice(&["spade", "space", "spark"]));
    /// let pool = words_from_slice(&["aaaaa", "spade"]);
    /// let cache = PartitionCache::new(16);
    ///
    /// let best = EntropyRanker::new(&cache, None, 100).select_best(&pool, &space).unwrap();
    /// assert_eq!(best.word.text(), "spade");
    /// ```
    #[must_use]
    pub fn select_best(&self, pool: &[Word], space: &SearchSpace) -> Option<RankedGuess> {
        if pool.len() > self.pool_cap {
            log::debug!(
                "pool of {} exceeds entropy cap {}, ranking by letter coverage",
                pool.len(),
                self.pool_cap
            );
            self.select_by_coverage(pool, space)
        } else {
            self.select_by_entropy(pool, space)
        }
    }

    /// Select the best guess by exact entropy regardless of pool size
    #[must_use]
    pub fn select_by_entropy(&self, pool: &[Word], space: &SearchSpace) -> Option<RankedGuess> {
        self.rank_by_entropy(pool, space)
            .into_iter()
            .reduce(|best, next| if next.rank_cmp(&best).is_gt() { next } else { best })
    }

    /// Select the best guess by the letter-coverage approximation
    #[must_use]
    pub fn select_by_coverage(&self, pool: &[Word], space: &SearchSpace) -> Option<RankedGuess> {
        if space.is_empty() {
            return None;
        }
        let coverage = letter_coverage(space.words(), self.weights);

        pool.par_iter()
            .map(|guess| RankedGuess {
                word: *guess,
                score: coverage_score(guess, &coverage),
                scoring: Scoring::CoverageProxy,
                in_space: space.contains(guess),
            })
            .collect::<Vec<_>>()
            .into_iter()
            .reduce(|best, next| if next.rank_cmp(&best).is_gt() { next } else { best })
    }

    /// Score every guess in `pool` by entropy, best first
    #[must_use]
    pub fn rank_all(&self, pool: &[Word], space: &SearchSpace) -> Vec<RankedGuess> {
        let mut ranked = self.rank_by_entropy(pool, space);
        ranked.sort_by(|a, b| b.rank_cmp(a));
        ranked
    }

    /// Partition of `space` by `guess`, through the cache
    #[must_use]
    pub fn partition(&self, guess: &Word, space: &SearchSpace) -> Arc<Partition> {
        let weighted = self.weights.is_some();
        if let Some(hit) = self.cache.get(guess, weighted, space.snapshot()) {
            return hit;
        }
        let partition = Arc::new(Partition::compute(guess, space.words(), self.weights));
        self.cache
            .insert(guess, weighted, space.snapshot(), Arc::clone(&partition));
        partition
    }

    /// Partitions for a whole pool, in pool order
    #[must_use]
    pub fn partitions(&self, pool: &[Word], space: &SearchSpace) -> Vec<Arc<Partition>> {
        let weighted = self.weights.is_some();
        let snapshot = space.snapshot();

        let cached: Vec<Option<Arc<Partition>>> = pool
            .iter()
            .map(|guess| self.cache.get(guess, weighted, snapshot))
            .collect();

        pool.par_iter()
            .zip(cached.into_par_iter())
            .map(|(guess, hit)| {
                hit.unwrap_or_else(|| {
                    let partition = Arc::new(Partition::compute(guess, space.words(), self.weights));
                    self.cache
                        .insert(guess, weighted, snapshot, Arc::clone(&partition));
                    partition
                })
            })
            .collect()
    }

    fn rank_by_entropy(&self, pool: &[Word], space: &SearchSpace) -> Vec<RankedGuess> {
        if space.is_empty() {
            return Vec::new();
        }
        pool.iter()
            .zip(self.partitions(pool, space))
            .map(|(guess, partition)| RankedGuess {
                word: *guess,
                score: partition.entropy(),
                scoring: Scoring::Entropy,
                in_space: space.contains(guess),
            })
            .collect()
    }
}
