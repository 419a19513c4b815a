//! Entropy-based ranking
//!
//! Shannon entropy of feedback partitions, the partition cache and the ranker
//! built on top of them.

mod cache;
mod calculator;
mod selector;

pub use cache::{CacheStats, PartitionCache};
pub use calculator::{
    Cell, GuessMetrics, Partition, calculate_entropy, coverage_score, letter_coverage,
    shannon_entropy,
};
pub use selector::{EntropyRanker, RankedGuess, Scoring};
