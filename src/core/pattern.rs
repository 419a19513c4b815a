//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not credited anywhere in the answer)
//! - 1 = Present (letter in answer, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.
//!
//! On the wire a pattern is written with the guessed letter for `Exact`,
//! `-` for `Present` and `+` for `Absent`: ALLOT scored against LOBBY is
//! `+-+-+`, LOBBY against itself is `lobby`.

use super::word::{WORD_LEN, Word, letter_index};
use thiserror::Error;

/// Number of distinct feedback patterns (3^`WORD_LEN`)
pub const PATTERN_COUNT: usize = 3usize.pow(WORD_LEN as u32);

const _: () = assert!(PATTERN_COUNT <= 256, "patterns must fit in a u8");

/// Wire symbol for a letter present elsewhere in the answer
pub const PRESENT_SYMBOL: char = '-';

/// Wire symbol for a letter absent from the answer
pub const ABSENT_SYMBOL: char = '+';

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter matches this position
    Exact,
    /// Letter occurs elsewhere in the answer
    Present,
    /// Letter is not credited anywhere in the answer
    Absent,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Error type for unparseable wire patterns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must be exactly {WORD_LEN} symbols, got {0}")]
    InvalidLength(usize),
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { position: usize, symbol: char },
    #[error("position {position} marks {found:?} as exact but the guess has {expected:?}")]
    LetterMismatch {
        position: usize,
        expected: char,
        found: char,
    },
}

/// Feedback pattern for a guess
///
/// Represents the per-position feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All exact (perfect match)
    pub const PERFECT: Self = Self((PATTERN_COUNT - 1) as u8);

    /// All absent
    pub const NONE: Self = Self(0);

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= [`PATTERN_COUNT`]
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!((value as usize) < PATTERN_COUNT, "pattern value out of range");
        Self(value)
    }

    /// Get the raw pattern value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all exact)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Pure and deterministic, so callers may memoize it freely.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and remove them from the answer's letter pool
    /// 2. Second pass: mark present-but-misplaced letters while the pool still holds them
    /// 3. Encode as base-3 number
    ///
    /// The order matters: a letter guessed more often than it occurs in the
    /// answer is credited exactly as many times as it occurs, exact hits first.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Pattern, Word};
    ///
    /// let guess = Word::new("allot").unwrap();
    /// let answer = Word::new("lobby").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.to_wire(&guess), "+-+-+");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [0u8; WORD_LEN];
        let mut available = answer.letter_counts();
        let guess_chars = guess.chars();
        let answer_chars = answer.chars();

        // Allow: index needed to read both words and write result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess_chars[i] == answer_chars[i] {
                result[i] = Feedback::Exact.digit();
                available[letter_index(guess_chars[i])] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == 0 {
                let slot = &mut available[letter_index(guess_chars[i])];
                if *slot > 0 {
                    result[i] = Feedback::Present.digit();
                    *slot -= 1;
                }
            }
        }

        Self::encode(&result)
    }

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_symbols(symbols: &[Feedback; WORD_LEN]) -> Self {
        let digits = symbols.map(Feedback::digit);
        Self::encode(&digits)
    }

    /// Decode the pattern into per-position feedback
    #[must_use]
    pub fn symbols(self) -> [Feedback; WORD_LEN] {
        let mut symbols = [Feedback::Absent; WORD_LEN];
        let mut val = self.0;
        for symbol in &mut symbols {
            *symbol = Feedback::from_digit(val % 3);
            val /= 3;
        }
        symbols
    }

    /// Count the positions with the given feedback
    #[must_use]
    pub fn count(self, feedback: Feedback) -> usize {
        self.symbols().iter().filter(|&&s| s == feedback).count()
    }

    /// Parse the wire format: the guess letter for exact, `-` for present, `+` for absent
    ///
    /// Whitespace around the pattern and upper-case letters are accepted.
    ///
    /// # Errors
    /// Returns `PatternError` if the length is wrong, a symbol is unknown, or an
    /// exact letter disagrees with the guess at that position.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("lobby").unwrap();
    /// let pattern = Pattern::parse_wire("lo+-+", &guess).unwrap();
    /// assert_eq!(pattern.symbols()[3], Feedback::Present);
    /// assert!(Pattern::parse_wire("lobbx", &guess).is_err());
    /// ```
    pub fn parse_wire(text: &str, guess: &Word) -> Result<Self, PatternError> {
        let chars: Vec<char> = text.trim().chars().collect();
        if chars.len() != WORD_LEN {
            return Err(PatternError::InvalidLength(chars.len()));
        }

        let mut symbols = [Feedback::Absent; WORD_LEN];
        for (position, (&symbol, slot)) in chars.iter().zip(symbols.iter_mut()).enumerate() {
            *slot = match symbol {
                PRESENT_SYMBOL => Feedback::Present,
                ABSENT_SYMBOL => Feedback::Absent,
                letter if letter.is_ascii_alphabetic() => {
                    let found = letter.to_ascii_lowercase();
                    let expected = char::from(guess.char_at(position));
                    if found != expected {
                        return Err(PatternError::LetterMismatch {
                            position,
                            expected,
                            found,
                        });
                    }
                    Feedback::Exact
                }
                _ => return Err(PatternError::InvalidSymbol { position, symbol }),
            };
        }

        Ok(Self::from_symbols(&symbols))
    }

    /// Render the wire format for this pattern against `guess`
    #[must_use]
    pub fn to_wire(self, guess: &Word) -> String {
        self.symbols()
            .iter()
            .zip(guess.chars())
            .map(|(symbol, &letter)| match symbol {
                Feedback::Exact => char::from(letter),
                Feedback::Present => PRESENT_SYMBOL,
                Feedback::Absent => ABSENT_SYMBOL,
            })
            .collect()
    }

    /// Convert pattern to emoji string for terminal display
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.symbols()
            .iter()
            .map(|symbol| match symbol {
                Feedback::Exact => '🟩',
                Feedback::Present => '🟨',
                Feedback::Absent => '⬜',
            })
            .collect()
    }

    fn encode(digits: &[u8; WORD_LEN]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for (i, &digit) in digits.iter().enumerate() {
            pattern += digit * multiplier;
            if i + 1 < WORD_LEN {
                multiplier *= 3;
            }
        }
        Self(pattern)
    }
}
