//! Core domain types
//!
//! Words and feedback patterns. Everything here is pure and has no knowledge
//! of search spaces or strategies.

mod pattern;
mod word;

pub use pattern::{ABSENT_SYMBOL, Feedback, PATTERN_COUNT, PRESENT_SYMBOL, Pattern, PatternError};
pub use word::{ALPHABET, WORD_LEN, Word, WordError, letter_index};
