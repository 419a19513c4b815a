//! Opening guess selection
//!
//! The first guess has no feedback to condition on, so it depends only on the
//! possible answers. Rather than scoring the whole vocabulary, the pool is the
//! curated openers plus words built from the most frequent letters at each
//! position.

use super::config::OpeningConfig;
use super::entropy::{EntropyRanker, RankedGuess};
use super::search_space::SearchSpace;
use crate::core::{ALPHABET, WORD_LEN, Word, letter_index};

/// Builds and scores the opening candidate pool
#[derive(Debug, Clone)]
pub struct OpeningBook<'a> {
    config: &'a OpeningConfig,
}

impl<'a> OpeningBook<'a> {
    #[must_use]
    pub const fn new(config: &'a OpeningConfig) -> Self {
        Self { config }
    }

    /// Assemble the bounded opening pool for `answers`, sorted
    ///
    /// Curated openers are always included; generated words fill the rest of
    /// `pool_limit` in cartesian-product order of the top letters per position.
    #[must_use]
    pub fn candidate_pool(&self, answers: &[Word]) -> Vec<Word> {
        let mut pool: Vec<Word> = self.config.known_openers.clone();
        pool.sort_unstable();
        pool.dedup();

        let top = top_letters_per_position(answers, self.config.top_letters_per_position);
        let budget = self.config.pool_limit.saturating_sub(pool.len());

        let generated = CartesianWords::new(&top)
            .filter(|word| !self.config.distinct_letters_only || word.has_distinct_letters())
            .take(budget);
        pool.extend(generated);

        pool.sort_unstable();
        pool.dedup();
        pool
    }

    /// Pick the max-entropy opener from `pool` against all `answers`
    #[must_use]
    pub fn compute_opening(
        &self,
        answers: &SearchSpace,
        pool: &[Word],
        ranker: &EntropyRanker<'_>,
    ) -> Option<RankedGuess> {
        ranker.select_by_entropy(pool, answers)
    }
}

/// Most frequent letters at each position, ties broken alphabetically
#[must_use]
pub fn top_letters_per_position(answers: &[Word], k: usize) -> [Vec<u8>; WORD_LEN] {
    let mut counts = [[0usize; ALPHABET]; WORD_LEN];
    for word in answers {
        for (position, &ch) in word.chars().iter().enumerate() {
            counts[position][letter_index(ch)] += 1;
        }
    }

    counts.map(|per_letter| {
        let mut letters: Vec<(usize, u8)> = per_letter
            .iter()
            .zip(b'a'..=b'z')
            .filter(|&(&count, _)| count > 0)
            .map(|(&count, letter)| (count, letter))
            .collect();
        letters.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        letters.into_iter().take(k).map(|(_, letter)| letter).collect()
    })
}

/// Iterates every word whose i-th letter is drawn from `choices[i]`
///
/// The last position varies fastest.
struct CartesianWords<'c> {
    choices: &'c [Vec<u8>; WORD_LEN],
    indices: [usize; WORD_LEN],
    done: bool,
}

impl<'c> CartesianWords<'c> {
    fn new(choices: &'c [Vec<u8>; WORD_LEN]) -> Self {
        Self {
            choices,
            indices: [0; WORD_LEN],
            done: choices.iter().any(Vec::is_empty),
        }
    }
}

impl Iterator for CartesianWords<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        if self.done {
            return None;
        }

        let mut bytes = [0u8; WORD_LEN];
        for (position, byte) in bytes.iter_mut().enumerate() {
            *byte = self.choices[position][self.indices[position]];
        }

        // advance the odometer
        self.done = true;
        for position in (0..WORD_LEN).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.choices[position].len() {
                self.done = false;
                break;
            }
            self.indices[position] = 0;
        }

        Word::from_bytes(bytes).ok()
    }
}
