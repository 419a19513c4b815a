//! The live set of possible answers
//!
//! Words are kept sorted and deduplicated, so two spaces with the same
//! contents always produce equal snapshots.

use crate::core::{Pattern, Word};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Immutable, cheaply clonable view of a search space
///
/// Hashing uses a precomputed digest; equality compares the full contents,
/// so distinct spaces never alias as cache keys.
#[derive(Debug, Clone)]
pub struct SpaceSnapshot {
    words: Arc<[Word]>,
    digest: u64,
}

impl SpaceSnapshot {
    fn from_sorted(words: Vec<Word>) -> Self {
        let mut hasher = FxHasher::default();
        words.hash(&mut hasher);
        Self {
            words: words.into(),
            digest: hasher.finish(),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl PartialEq for SpaceSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest
            && (Arc::ptr_eq(&self.words, &other.words) || self.words == other.words)
    }
}

impl Eq for SpaceSnapshot {}

impl Hash for SpaceSnapshot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.digest);
    }
}

/// Words still consistent with every feedback pattern seen this game
#[derive(Debug, Clone)]
pub struct SearchSpace {
    snapshot: SpaceSnapshot,
}

impl SearchSpace {
    /// Create a space holding `answers`
    #[must_use]
    pub fn new(answers: &[Word]) -> Self {
        let mut words = answers.to_vec();
        words.sort_unstable();
        words.dedup();
        Self {
            snapshot: SpaceSnapshot::from_sorted(words),
        }
    }

    /// Keep only words that would have produced `observed` for `guess`
    ///
    /// Returns the number of words removed.
    pub fn filter(&mut self, guess: &Word, observed: Pattern) -> usize {
        let before = self.len();
        *self = self.filtered(guess, observed);
        before - self.len()
    }

    /// The narrowed space, leaving `self` untouched
    #[must_use]
    pub fn filtered(&self, guess: &Word, observed: Pattern) -> Self {
        let words: Vec<Word> = self
            .words()
            .iter()
            .filter(|&candidate| Pattern::calculate(guess, candidate) == observed)
            .copied()
            .collect();
        Self {
            snapshot: SpaceSnapshot::from_sorted(words),
        }
    }

    /// Replace the contents with `answers`
    ///
    /// Recovery only; a consistent game never needs this.
    pub fn reset(&mut self, answers: &[Word]) {
        *self = Self::new(answers);
    }

    /// Words in lexicographic order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        self.snapshot.words()
    }

    #[must_use]
    pub fn snapshot(&self) -> &SpaceSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words().is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words().binary_search(word).is_ok()
    }
}
