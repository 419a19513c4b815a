//! Word list loading utilities
//!
//! Plain text, one word per line. `#` starts a comment line.

use super::{Vocabulary, VocabularyError, WordWeights};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load a vocabulary from a file
///
/// # Errors
///
/// Returns `VocabularyError::Io` if the file cannot be read, `Malformed` with
/// the 1-based line number for the first invalid word, or `Empty`.
///
/// # Examples
/// ```no_run
/// use codebreaker::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary, VocabularyError> {
    let content = read(path.as_ref())?;
    parse_word_list(&content)
}

/// Parse word list text; comment lines keep their line number
///
/// # Errors
///
/// See [`Vocabulary::from_words`].
pub fn parse_word_list(content: &str) -> Result<Vocabulary, VocabularyError> {
    Vocabulary::from_words(content.lines().map(|line| {
        let trimmed = line.trim();
        if trimmed.starts_with('#') { "" } else { trimmed }
    }))
}

/// Load a `word<TAB>frequency` table
///
/// Lines without a frequency column or with an invalid word are skipped;
/// an unparseable frequency counts as `1.0`.
///
/// # Errors
///
/// Returns `VocabularyError::Io` if the file cannot be read.
pub fn load_weights_from_file<P: AsRef<Path>>(path: P) -> Result<WordWeights, VocabularyError> {
    let content = read(path.as_ref())?;
    Ok(parse_weights(&content))
}

/// Parse frequency table text
#[must_use]
pub fn parse_weights(content: &str) -> WordWeights {
    let mut weights = WordWeights::new();

    for (idx, line) in content.lines().enumerate() {
        let mut parts = line.trim().split('\t');
        let (Some(word), Some(frequency)) = (parts.next(), parts.next()) else {
            continue;
        };
        match Word::new(word.trim()) {
            Ok(word) => {
                let weight = frequency.trim().parse::<f64>().unwrap_or(1.0);
                weights.insert(word, weight);
            }
            Err(e) => log::debug!("skipping frequency line {}: {e}", idx + 1),
        }
    }

    weights
}

/// Convert string slices to words, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn read(path: &Path) -> Result<String, VocabularyError> {
    fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["allot", "toolong", "abc", "below"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "allot");
        assert_eq!(words[1].text(), "below");
    }

    #[test]
    fn parse_word_list_handles_comments_and_blanks() {
        let vocab = parse_word_list("# openers\nallot\n\nbelow\nallot\n").unwrap();
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn parse_word_list_reports_file_line() {
        let err = parse_word_list("# header\nallot\nb3low\n").unwrap_err();
        assert!(matches!(err, VocabularyError::Malformed { line: 3, .. }));
    }

    #[test]
    fn parse_weights_defaults_bad_frequency() {
        let weights = parse_weights("lobby\t12.5\nmixed\tlots\nbelow\nwrongsize\t3\n");

        assert_eq!(weights.len(), 2);
        assert!((weights.weight(&Word::new("lobby").unwrap()) - 12.5).abs() < 1e-9);
        assert!((weights.weight(&Word::new("mixed").unwrap()) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/codebreaker/words.txt").unwrap_err();
        assert!(matches!(err, VocabularyError::Io { .. }));
    }
}
