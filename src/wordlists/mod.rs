//! Word lists
//!
//! The guessable vocabulary, the possible answers and the optional answer
//! frequency table. All three are loaded once and stay read-only.

pub mod loader;

use crate::core::{Word, WordError};
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::PathBuf;
use thiserror::Error;

/// Error raised while building a word list
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: malformed word {word:?}")]
    Malformed {
        line: usize,
        word: String,
        #[source]
        source: WordError,
    },
    #[error("word list is empty")]
    Empty,
}

/// An ordered, duplicate-free list of words
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<Word>,
    members: FxHashSet<Word>,
}

impl Vocabulary {
    /// Build a vocabulary from in-memory strings
    ///
    /// Blank entries are skipped and duplicates keep their first position.
    ///
    /// # Errors
    /// Returns `VocabularyError::Malformed` (1-based index) for the first
    /// entry that is not a valid word, or `VocabularyError::Empty`.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_words(["allot", "below", "allot"]).unwrap();
    /// assert_eq!(vocab.len(), 2);
    /// assert!(Vocabulary::from_words(["allot", "bad"]).is_err());
    /// ```
    pub fn from_words<I, S>(entries: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();

        for (idx, entry) in entries.into_iter().enumerate() {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            let word = Word::new(trimmed).map_err(|source| VocabularyError::Malformed {
                line: idx + 1,
                word: trimmed.to_string(),
                source,
            })?;
            vocab.push(word);
        }

        if vocab.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(vocab)
    }

    fn push(&mut self, word: Word) {
        if self.members.insert(word) {
            self.words.push(word);
        }
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.members.contains(word)
    }
}

impl FromIterator<Word> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        let mut vocab = Self::default();
        for word in iter {
            vocab.push(word);
        }
        vocab
    }
}

/// Relative answer frequencies used when frequency weighting is enabled
///
/// Words without an entry weigh `1.0`.
#[derive(Debug, Clone, Default)]
pub struct WordWeights {
    weights: FxHashMap<Word, f64>,
}

impl WordWeights {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: Word, weight: f64) {
        self.weights.insert(word, weight);
    }

    /// Weight of `word`, `1.0` if unknown
    #[must_use]
    pub fn weight(&self, word: &Word) -> f64 {
        self.weights.get(word).copied().unwrap_or(1.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
