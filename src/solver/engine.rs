//! Main solver interface

use super::config::SolverConfig;
use super::entropy::{CacheStats, EntropyRanker, PartitionCache, RankedGuess};
use super::opening::OpeningBook;
use super::search_space::SearchSpace;
use super::session::{GameSession, GameStatus, TurnError, TurnRecord};
use crate::core::{Pattern, Word};
use crate::wordlists::WordWeights;
use log::info;
use std::sync::OnceLock;

/// Shared, read-only solving engine
///
/// Holds the word lists, strategy configuration, partition cache and the
/// opening guess once computed. Any number of [`GameSession`]s can borrow it
/// concurrently.
#[derive(Debug)]
pub struct Solver<'a> {
    all_words: &'a [Word],
    answer_words: &'a [Word],
    weights: Option<&'a WordWeights>,
    config: SolverConfig,
    cache: PartitionCache,
    opening: OnceLock<Word>,
}

/// Result of one locally played game
#[derive(Debug, Clone, PartialEq)]
pub struct GameOutcome {
    pub answer: Word,
    pub solved: bool,
    pub turns: Vec<TurnRecord>,
}

impl GameOutcome {
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.turns.len()
    }
}

impl<'a> Solver<'a> {
    /// Create a solver over the given word lists
    ///
    /// # Parameters
    /// - `all_words`: All valid guessable words
    /// - `answer_words`: Words that can be the secret
    #[must_use]
    pub fn new(all_words: &'a [Word], answer_words: &'a [Word], config: SolverConfig) -> Self {
        let cache = PartitionCache::new(config.cache_capacity);
        Self {
            all_words,
            answer_words,
            weights: None,
            config,
            cache,
            opening: OnceLock::new(),
        }
    }

    /// Frequency table used when `use_frequency_weighting` is set
    #[must_use]
    pub fn with_weights(mut self, weights: &'a WordWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Replace the partition cache, e.g. with [`PartitionCache::disabled`]
    #[must_use]
    pub fn with_cache(mut self, cache: PartitionCache) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a [Word] {
        self.all_words
    }

    #[must_use]
    pub const fn answers(&self) -> &'a [Word] {
        self.answer_words
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Ranker over this solver's cache, weighted if configured
    #[must_use]
    pub fn ranker(&self) -> EntropyRanker<'_> {
        let weights = self
            .weights
            .filter(|_| self.config.use_frequency_weighting);
        EntropyRanker::new(&self.cache, weights, self.config.entropy_pool_cap)
    }

    /// Score every word in `pool` against `space`, best first
    #[must_use]
    pub fn rank(&self, pool: &[Word], space: &SearchSpace) -> Vec<RankedGuess> {
        self.ranker().rank_all(pool, space)
    }

    /// The opening guess, computed on first use and reused afterwards
    ///
    /// # Errors
    /// [`TurnError::NoCandidate`] when there are no possible answers.
    pub fn opening(&self) -> Result<Word, TurnError> {
        if let Some(word) = self.opening.get() {
            return Ok(*word);
        }

        let book = OpeningBook::new(&self.config.opening);
        let pool = book.candidate_pool(self.answer_words);
        let answers = SearchSpace::new(self.answer_words);
        let best = book
            .compute_opening(&answers, &pool, &self.ranker())
            .ok_or(TurnError::NoCandidate)?;

        info!(
            "opening guess {} ({:.3} bits over {} answers, pool of {})",
            best.word,
            best.score,
            answers.len(),
            pool.len()
        );
        Ok(*self.opening.get_or_init(|| best.word))
    }

    /// Start a new game
    #[must_use]
    pub fn session(&self) -> GameSession<'_> {
        GameSession::new(self)
    }

    /// Play a full game against a known `answer`
    ///
    /// # Errors
    /// Propagates the [`TurnError`] that ended the game early, e.g. when
    /// `answer` is not among the possible answers.
    pub fn play(&self, answer: &Word) -> Result<GameOutcome, TurnError> {
        let mut session = self.session();
        while !session.status().is_terminal() {
            let decision = session.next_guess()?;
            session.receive_feedback(Pattern::calculate(&decision.word, answer))?;
        }

        Ok(GameOutcome {
            answer: *answer,
            solved: session.status() == GameStatus::Solved,
            turns: session.history().to_vec(),
        })
    }
}
