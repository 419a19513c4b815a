//! Word representation
//!
//! A Word stores exactly [`WORD_LEN`] lowercase ASCII letters inline, so it is
//! `Copy` and cheap to pass around the ranking loops.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word and every feedback pattern
pub const WORD_LEN: usize = 5;

/// Size of the letter alphabet (`a..=z`)
pub const ALPHABET: usize = 26;

/// An immutable word of [`WORD_LEN`] lowercase letters
///
/// Ordering is lexicographic, which is what the rankers use to break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Upper-case input is normalised to lower case.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`WORD_LEN`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Word;
    ///
    /// let word = Word::new("LOBBY").unwrap();
    /// assert_eq!(word.text(), "lobby");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes = text.as_bytes();
        let chars: [u8; WORD_LEN] = bytes
            .try_into()
            .map_err(|_| WordError::InvalidLength(bytes.len()))?;

        Self::from_bytes(chars)
    }

    /// Create a Word from raw bytes, normalising case
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an ASCII letter.
    pub fn from_bytes(mut chars: [u8; WORD_LEN]) -> Result<Self, WordError> {
        for ch in &mut chars {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }
            ch.make_ascii_lowercase();
        }
        Ok(Self { chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Construction only admits ASCII letters
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LEN`]
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Check whether every letter of the word is different
    #[must_use]
    pub fn has_distinct_letters(&self) -> bool {
        let mut seen = 0u32;
        for &ch in &self.chars {
            let bit = 1 << letter_index(ch);
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
        true
    }

    /// Get the count of each letter in the word, indexed `a = 0 .. z = 25`
    ///
    /// Used for pattern calculation with duplicate letters.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET] {
        let mut counts = [0u8; ALPHABET];
        for &ch in &self.chars {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

/// Index of a lowercase ASCII letter in `0..ALPHABET`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("lobby").unwrap();
        assert_eq!(word.text(), "lobby");
        assert_eq!(word.chars(), b"lobby");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("ALLOT").unwrap();
        assert_eq!(word.text(), "allot");

        let word2 = Word::new("AlLoT").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("mix3d"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("mixe "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("mixé"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at_and_has_letter() {
        let word = Word::new("below").unwrap();
        assert_eq!(word.char_at(0), b'b');
        assert_eq!(word.char_at(4), b'w');
        assert!(word.has_letter(b'l'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("lobby").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_index(b'b')], 2);
        assert_eq!(counts[letter_index(b'l')], 1);
        assert_eq!(counts[letter_index(b'z')], 0);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), WORD_LEN);
    }

    #[test]
    fn word_distinct_letters() {
        assert!(Word::new("mixed").unwrap().has_distinct_letters());
        assert!(!Word::new("lobby").unwrap().has_distinct_letters());
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words: Vec<Word> = ["mixed", "allot", "lobby", "below"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["allot", "below", "lobby", "mixed"]);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "mixed".parse().unwrap();
        assert_eq!(format!("{word}"), "mixed");
    }
}
