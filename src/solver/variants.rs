//! Optional guess heuristics
//!
//! Both produce letter probes that need not be real words. They are off by
//! default and switched on through [`SolverConfig`](super::SolverConfig).

use super::entropy::{EntropyRanker, RankedGuess};
use super::search_space::SearchSpace;
use crate::core::{ALPHABET, Feedback, Pattern, WORD_LEN, Word, letter_index};
use itertools::Itertools;
use rustc_hash::FxHashSet;

/// Absent counts that make a pattern eligible for a dummy probe
const DUMMY_ABSENT_COUNTS: [usize; 2] = [1, 2];

/// Probes stop once this many guesses have been made
const DUMMY_MAX_GUESSES: usize = 5;

/// A probe needs at least this many different letters to be worth a turn
const DUMMY_MIN_DISTINCT: usize = 3;

const DUMMY_PADDING: u8 = b'a';

/// Best arrangement of the five most common letters not yet confirmed
///
/// Letters marked `Exact` or `Present` in the first feedback are excluded;
/// the rest are ranked by how often they appear across `space`. Returns `None`
/// when fewer than [`WORD_LEN`] letters are left to choose from.
#[must_use]
pub fn distinct_second_guess(
    first_guess: &Word,
    first_pattern: Pattern,
    space: &SearchSpace,
    ranker: &EntropyRanker<'_>,
) -> Option<RankedGuess> {
    let mut known = [false; ALPHABET];
    for (&ch, mark) in first_guess.chars().iter().zip(first_pattern.symbols()) {
        if mark != Feedback::Absent {
            known[letter_index(ch)] = true;
        }
    }

    let mut counts = [0usize; ALPHABET];
    for word in space.words() {
        for &ch in word.chars() {
            counts[letter_index(ch)] += 1;
        }
    }

    let letters = ranked_letters(&counts, |letter| !known[letter_index(letter)]);
    let top = letters.get(..WORD_LEN)?;

    let pool: Vec<Word> = top
        .iter()
        .copied()
        .permutations(WORD_LEN)
        .filter_map(|bytes| <[u8; WORD_LEN]>::try_from(bytes).ok())
        .filter_map(|bytes| Word::from_bytes(bytes).ok())
        .collect();
    ranker.select_by_entropy(&pool, space)
}

/// Remembers which patterns already triggered a dummy probe this game
#[derive(Debug, Clone, Default)]
pub struct DummyProbe {
    used: FxHashSet<Pattern>,
}

impl DummyProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a probe from the letters candidates hold at the first unresolved position
    ///
    /// Fires only for patterns with one or two `Absent` marks and no `Present`
    /// ones, before the fifth guess, and at most once per distinct pattern.
    /// Letters are ordered by frequency and padded with `a` to full length.
    pub fn try_probe(&mut self, pattern: Pattern, guesses_made: usize, candidates: &[Word]) -> Option<Word> {
        if !DUMMY_ABSENT_COUNTS.contains(&pattern.count(Feedback::Absent))
            || pattern.count(Feedback::Present) > 0
            || guesses_made >= DUMMY_MAX_GUESSES
        {
            return None;
        }
        if !self.used.insert(pattern) {
            return None;
        }

        let position = pattern
            .symbols()
            .iter()
            .position(|&mark| mark == Feedback::Absent)?;

        let mut counts = [0usize; ALPHABET];
        for word in candidates {
            counts[letter_index(word.char_at(position))] += 1;
        }
        let letters = ranked_letters(&counts, |_| true);
        if letters.len() < DUMMY_MIN_DISTINCT {
            return None;
        }

        let mut bytes = [DUMMY_PADDING; WORD_LEN];
        for (slot, &letter) in bytes.iter_mut().zip(&letters) {
            *slot = letter;
        }
        Word::from_bytes(bytes).ok()
    }

    pub fn clear(&mut self) {
        self.used.clear();
    }
}

/// Letters with a non-zero count, most frequent first, ties alphabetical
fn ranked_letters(counts: &[usize; ALPHABET], keep: impl Fn(u8) -> bool) -> Vec<u8> {
    let mut letters: Vec<(usize, u8)> = counts
        .iter()
        .zip(b'a'..=b'z')
        .filter(|&(&count, letter)| count > 0 && keep(letter))
        .map(|(&count, letter)| (count, letter))
        .collect();
    letters.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    letters.into_iter().map(|(_, letter)| letter).collect()
}
