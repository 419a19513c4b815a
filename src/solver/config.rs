//! Strategy configuration
//!
//! Every heuristic the solver knows about is a named option here; nothing is
//! toggled through globals.

use crate::core::Word;
use crate::wordlists::loader::words_from_slice;

/// Openers that score well against common answer lists
pub const KNOWN_OPENERS: &[&str] = &[
    "saren", "ranes", "saret", "tares", "earis", "saner", "lares", "aires", "raise", "sarel",
    "sarie", "tales", "crane", "stale",
];

/// Where the ranker draws its candidate guesses from after the opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPool {
    /// Words still in the search space that have not been guessed yet
    #[default]
    Candidates,
    /// The whole guessable vocabulary
    Vocabulary,
}

/// What to do when feedback eliminates every possible answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySpacePolicy {
    /// Stop the game and report the inconsistency to the caller
    #[default]
    Report,
    /// Log a warning and reset to all possible answers not yet guessed
    ResetAndContinue,
}

/// How the opening guess pool is assembled
#[derive(Debug, Clone)]
pub struct OpeningConfig {
    /// Most frequent letters kept per position for the cartesian product
    pub top_letters_per_position: usize,
    /// Upper bound on the pool size, curated openers included
    pub pool_limit: usize,
    /// Curated openers always evaluated
    pub known_openers: Vec<Word>,
    /// Skip generated openers that repeat a letter
    pub distinct_letters_only: bool,
}

impl Default for OpeningConfig {
    fn default() -> Self {
        Self {
            top_letters_per_position: 2,
            pool_limit: 100,
            known_openers: words_from_slice(KNOWN_OPENERS),
            distinct_letters_only: false,
        }
    }
}

/// Solver strategy configuration
///
/// # Examples
/// ```
/// use codebreaker::solver::{EmptySpacePolicy, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_max_attempts(8)
///     .with_disambiguation_threshold(10)
///     .with_empty_space_policy(EmptySpacePolicy::ResetAndContinue);
/// assert_eq!(config.max_attempts, 8);
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Guesses allowed per game (default: 6)
    pub max_attempts: usize,
    /// Weight answers by the frequency table in entropy and coverage scores
    pub use_frequency_weighting: bool,
    /// Candidate guesses considered after the opening
    pub guess_pool: GuessPool,
    /// Pools larger than this are ranked by letter coverage instead of entropy (default: 1000)
    pub entropy_pool_cap: usize,
    /// Spaces of `2..=threshold` words go to the disambiguator (default: 20)
    pub disambiguation_threshold: usize,
    /// Synthetic words the disambiguator may evaluate (default: 100)
    pub disambiguation_budget: usize,
    /// Also scan the guessable vocabulary for a fully disambiguating word
    pub disambiguate_with_vocabulary: bool,
    pub opening: OpeningConfig,
    /// Second guess is the best arrangement of the five most common unconfirmed letters
    pub distinct_second_guess: bool,
    /// Probe the letters seen at an unresolved position when only 1-2 remain unresolved
    pub dummy_guess: bool,
    pub empty_space_policy: EmptySpacePolicy,
    /// Partition cache entries, `0` disables caching (default: 4096)
    pub cache_capacity: usize,
    /// Seed for per-session randomness
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            use_frequency_weighting: false,
            guess_pool: GuessPool::Candidates,
            entropy_pool_cap: 1_000,
            disambiguation_threshold: 20,
            disambiguation_budget: 100,
            disambiguate_with_vocabulary: false,
            opening: OpeningConfig::default(),
            distinct_second_guess: false,
            dummy_guess: false,
            empty_space_policy: EmptySpacePolicy::Report,
            cache_capacity: 4_096,
            seed: 0,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_frequency_weighting(mut self, enabled: bool) -> Self {
        self.use_frequency_weighting = enabled;
        self
    }

    #[must_use]
    pub const fn with_guess_pool(mut self, guess_pool: GuessPool) -> Self {
        self.guess_pool = guess_pool;
        self
    }

    #[must_use]
    pub const fn with_entropy_pool_cap(mut self, cap: usize) -> Self {
        self.entropy_pool_cap = cap;
        self
    }

    #[must_use]
    pub const fn with_disambiguation_threshold(mut self, threshold: usize) -> Self {
        self.disambiguation_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_disambiguation_budget(mut self, budget: usize) -> Self {
        self.disambiguation_budget = budget;
        self
    }

    #[must_use]
    pub const fn with_vocabulary_disambiguation(mut self, enabled: bool) -> Self {
        self.disambiguate_with_vocabulary = enabled;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: OpeningConfig) -> Self {
        self.opening = opening;
        self
    }

    #[must_use]
    pub const fn with_distinct_second_guess(mut self, enabled: bool) -> Self {
        self.distinct_second_guess = enabled;
        self
    }

    #[must_use]
    pub const fn with_dummy_guess(mut self, enabled: bool) -> Self {
        self.dummy_guess = enabled;
        self
    }

    #[must_use]
    pub const fn with_empty_space_policy(mut self, policy: EmptySpacePolicy) -> Self {
        self.empty_space_policy = policy;
        self
    }

    #[must_use]
    pub const fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
