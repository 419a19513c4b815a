//! Endgame disambiguation
//!
//! With only a handful of answers left, the goal changes from average
//! information to worst case: find one guess that gives every remaining
//! answer its own feedback pattern. Failing that, the best member or
//! synthetic probe made of rare letters that leaves at most
//! [`MAX_PARTIAL_PARTITION`] answers indistinguishable.

use super::entropy::EntropyRanker;
use super::search_space::SearchSpace;
use crate::core::{ALPHABET, WORD_LEN, Word, letter_index};
use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::cmp::{Ordering, Reverse};

/// Letters seen at most this often in the space count as rare
const RARE_LETTER_MAX: usize = 2;

/// Only the first this-many letters (rarest first) feed the combinations
const LETTER_WINDOW: usize = 10;

/// Largest worst-case cell a partial disambiguator may leave
pub const MAX_PARTIAL_PARTITION: usize = 2;

/// How well a guess separates the space: smaller max cell, then more patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality {
    pub max_partition: usize,
    pub distinct_patterns: usize,
}

impl Quality {
    fn key(self) -> (usize, Reverse<usize>) {
        (self.max_partition, Reverse(self.distinct_patterns))
    }

    #[must_use]
    pub const fn is_full(self) -> bool {
        self.max_partition <= 1
    }
}

impl Ord for Quality {
    /// `Less` is better
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Quality {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Where a disambiguating guess came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    SearchSpace,
    Vocabulary,
    Synthetic,
}

/// A guess chosen by the disambiguator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disambiguation {
    pub word: Word,
    pub quality: Quality,
    pub origin: Origin,
}

/// Endgame strategy for small search spaces
#[derive(Debug, Clone, Copy)]
pub struct Disambiguator<'a> {
    ranker: EntropyRanker<'a>,
    budget: usize,
    vocabulary: Option<&'a [Word]>,
}

impl<'a> Disambiguator<'a> {
    /// `budget` bounds the synthetic words evaluated; `vocabulary`, when
    /// given, is scanned for a fully disambiguating word
    #[must_use]
    pub const fn new(
        ranker: EntropyRanker<'a>,
        budget: usize,
        vocabulary: Option<&'a [Word]>,
    ) -> Self {
        Self {
            ranker,
            budget,
            vocabulary,
        }
    }

    /// Quality of `guess` against `space`
    #[must_use]
    pub fn quality(&self, guess: &Word, space: &SearchSpace) -> Quality {
        let partition = self.ranker.partition(guess, space);
        Quality {
            max_partition: partition.max_partition(),
            distinct_patterns: partition.distinct_patterns(),
        }
    }

    /// Find a guess that separates every answer in `space`
    ///
    /// Checks members of the space first (in order), then the vocabulary if
    /// configured, then synthetic words from rare letters, which must beat the
    /// best partial split by a member to be chosen. Returns `None` when
    /// nothing within budget is good enough, so the caller falls back to
    /// entropy ranking.
    pub fn find<R: Rng + ?Sized>(&self, space: &SearchSpace, rng: &mut R) -> Option<Disambiguation> {
        if space.is_empty() {
            return None;
        }

        if let Some(found) = self.first_full(space.words(), space, Origin::SearchSpace) {
            return Some(found);
        }

        if let Some(vocabulary) = self.vocabulary
            && let Some(found) = self.first_full(vocabulary, space, Origin::Vocabulary)
        {
            return Some(found);
        }

        let member = self.best_member(space);
        self.best_synthetic(space, rng, member)
    }

    fn first_full(&self, pool: &[Word], space: &SearchSpace, origin: Origin) -> Option<Disambiguation> {
        pool.par_iter().find_map_first(|word| {
            let quality = self.quality(word, space);
            quality.is_full().then_some(Disambiguation {
                word: *word,
                quality,
                origin,
            })
        })
    }

    /// Best partial split among the space's own words, first on ties
    fn best_member(&self, space: &SearchSpace) -> Option<Disambiguation> {
        space
            .words()
            .par_iter()
            .map(|word| (*word, self.quality(word, space)))
            .filter(|(_, quality)| quality.max_partition <= MAX_PARTIAL_PARTITION)
            .min_by_key(|&(_, quality)| quality)
            .map(|(word, quality)| Disambiguation {
                word,
                quality,
                origin: Origin::SearchSpace,
            })
    }

    /// Synthetic words only replace `member` when strictly better, since a
    /// member can still win outright
    fn best_synthetic<R: Rng + ?Sized>(
        &self,
        space: &SearchSpace,
        rng: &mut R,
        member: Option<Disambiguation>,
    ) -> Option<Disambiguation> {
        let (rare, common) = rare_and_common_letters(space.words());
        let half_budget = self.budget / 2;
        let mut best = member;

        let mut rounds: Vec<Vec<u8>> = Vec::with_capacity(2);
        if rare.len() >= WORD_LEN {
            rounds.push(rare.clone());
        }
        if rare.len() + common.len() >= WORD_LEN {
            rounds.push(rare.into_iter().chain(common).collect());
        }

        for letters in rounds {
            if best.is_some_and(|b| b.quality.is_full()) {
                break;
            }
            for mut candidate in letter_combinations(&letters, half_budget) {
                candidate.shuffle(rng);
                let Ok(word) = Word::from_bytes(candidate) else {
                    continue;
                };

                let quality = self.quality(&word, space);
                if quality.max_partition > MAX_PARTIAL_PARTITION {
                    continue;
                }
                let found = Disambiguation {
                    word,
                    quality,
                    origin: Origin::Synthetic,
                };
                if quality.is_full() {
                    return Some(found);
                }
                if best.is_none_or(|b| quality < b.quality) {
                    best = Some(found);
                }
            }
        }

        best
    }
}

/// Letters present in `space`, rarest first, split at [`RARE_LETTER_MAX`]
///
/// Ties are broken alphabetically.
#[must_use]
pub fn rare_and_common_letters(space: &[Word]) -> (Vec<u8>, Vec<u8>) {
    let mut counts = [0usize; ALPHABET];
    for word in space {
        for &ch in word.chars() {
            counts[letter_index(ch)] += 1;
        }
    }

    let mut letters: Vec<(usize, u8)> = counts
        .iter()
        .zip(b'a'..=b'z')
        .filter(|&(&count, _)| count > 0)
        .map(|(&count, letter)| (count, letter))
        .collect();
    letters.sort_unstable();

    let split = letters.partition_point(|&(count, _)| count <= RARE_LETTER_MAX);
    let rare = letters[..split].iter().map(|&(_, letter)| letter).collect();
    let common = letters[split..].iter().map(|&(_, letter)| letter).collect();
    (rare, common)
}

/// Up to `limit` combinations of [`WORD_LEN`] distinct letters, lexicographic
/// in the order given, drawn from the first [`LETTER_WINDOW`] letters
fn letter_combinations(letters: &[u8], limit: usize) -> Vec<[u8; WORD_LEN]> {
    let window = &letters[..letters.len().min(LETTER_WINDOW)];
    window
        .iter()
        .copied()
        .combinations(WORD_LEN)
        .take(limit)
        .filter_map(|combo| combo.try_into().ok())
        .collect()
}
