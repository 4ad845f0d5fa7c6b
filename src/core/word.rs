//! Guess word representation
//!
//! A Word is a validated five-letter lowercase ASCII word. Guess tokens in the
//! game tree and candidate answers in the simulator are both Words.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word and status
pub const WORD_LENGTH: usize = 5;

/// A five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {0}", expected = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, normalising to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_gametree::core::Word;
    ///
    /// let word = Word::new("Reach").unwrap();
    /// assert_eq!(word.text(), "reach");
    ///
    /// assert!(Word::new("?NYNN").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Count of each letter, used for duplicate-aware status calculation
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("BRAWL").unwrap().text(), "brawl");
        assert_eq!(Word::new("QuArT").unwrap(), Word::new("quart").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("toolong"), Err(WordError::InvalidLength(7)));
        assert_eq!(Word::new("abc"), Err(WordError::InvalidLength(3)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("?nynn"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("héllo"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_counts_duplicates() {
        let counts = Word::new("hello").unwrap().char_counts();
        assert_eq!(counts.get(&b'l'), Some(&2));
        assert_eq!(counts.get(&b'h'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_parse_and_display() {
        let word: Word = "music".parse().unwrap();
        assert_eq!(format!("{word}"), "music");
    }
}
