//! Word set loading
//!
//! Word sets are plain text, one word per line. Blank lines are ignored.

use crate::core::Word;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a word set from a file
///
/// Every non-blank line must be a valid word.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be read, `Error::InvalidWord` for
/// the first line that is not a five-letter word, and `Error::EmptyWordSet`
/// if the file holds no words.
///
/// # Examples
/// ```no_run
/// use wordle_gametree::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words/official_wordle_100.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;

    let words = parse_words(&content)?;
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a word set, one word per line
///
/// # Errors
/// See `load_from_file`.
pub fn parse_words(content: &str) -> Result<Vec<Word>> {
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Word::new)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if words.is_empty() {
        return Err(Error::EmptyWordSet);
    }
    Ok(words)
}

/// Convert an embedded word set to words
///
/// # Examples
/// ```
/// use wordle_gametree::wordlists::loader::words_from_slice;
/// use wordle_gametree::wordlists::SMALL;
///
/// let words = words_from_slice(SMALL);
/// assert_eq!(words.len(), SMALL.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_skips_blank_lines() {
        let words = parse_words("hello\n\n  world \nWORDS\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["hello", "world", "words"]);
    }

    #[test]
    fn parse_words_rejects_bad_lines() {
        assert!(matches!(
            parse_words("hello\nhi\n"),
            Err(Error::InvalidWord(_))
        ));
        assert!(matches!(parse_words("\n\n"), Err(Error::EmptyWordSet)));
    }

    #[test]
    fn embedded_sets_convert_completely() {
        use crate::wordlists::{SMALL, STANDARD};

        assert_eq!(words_from_slice(SMALL).len(), SMALL.len());
        assert_eq!(words_from_slice(STANDARD).len(), STANDARD.len());
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = load_from_file("data/words/nope.txt").unwrap_err();
        assert!(err.to_string().contains("data/words/nope.txt"));
    }
}
