//! Adversary status tokens
//!
//! A status encodes the per-letter feedback for a guess using base-3 encoding:
//! - 0 = absent (`N`, letter not in the answer)
//! - 1 = present elsewhere (`?`, letter in the answer at another position)
//! - 2 = matched (`Y`, letter in the correct position)
//!
//! The status is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Matched,
}

impl Mark {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Matched => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Matched,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// The seed-file symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'N',
            Self::Present => '?',
            Self::Matched => 'Y',
        }
    }

    /// Parse a seed-file symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'N' => Some(Self::Absent),
            '?' => Some(Self::Present),
            'Y' => Some(Self::Matched),
            _ => None,
        }
    }
}

/// Error type for invalid status strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("status must have exactly {expected} marks, got {0}", expected = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("'{0}' is not a status symbol (expected one of Y, ?, N)")]
    InvalidSymbol(char),
}

/// Status token revealed by the adversary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(u8);

impl Status {
    /// All letters matched: the guess was the answer
    pub const SOLVED: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Get the raw encoded value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check whether every letter is matched
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Build a status from individual marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            value += mark.digit() * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }
        Self(value)
    }

    /// Decode the marks, first letter first
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Calculate the status revealed when `guess` is played against `answer`
    ///
    /// Matches are assigned first and consume their letter, so a repeated
    /// guess letter is only marked present while unmatched copies remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_gametree::core::{Status, Word};
    ///
    /// let guess = Word::new("reach").unwrap();
    /// let answer = Word::new("brawl").unwrap();
    /// assert_eq!(Status::calculate(&guess, &answer).to_string(), "?NYNN");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available = answer.char_counts();

        for (i, (g, a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                marks[i] = Mark::Matched;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, letter) in guess.chars().iter().enumerate() {
            if marks[i] == Mark::Matched {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self::from_marks(marks)
    }

    /// Convert to an emoji string such as "🟨⬜🟩⬜⬜"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Matched => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl FromStr for Status {
    type Err = StatusError;

    /// Parse a seed-file status such as `?NYNN`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(StatusError::InvalidLength(symbols.len()));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, &symbol) in marks.iter_mut().zip(&symbols) {
            *mark = Mark::from_symbol(symbol).ok_or(StatusError::InvalidSymbol(symbol))?;
        }
        Ok(Self::from_marks(marks))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.marks()
            .iter()
            .try_for_each(|mark| write!(f, "{}", mark.symbol()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(guess: &str, answer: &str) -> Status {
        Status::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn solved_constant() {
        assert_eq!(Status::SOLVED.value(), 242);
        assert_eq!(Status::SOLVED.to_string(), "YYYYY");
        assert!(status("crane", "crane").is_solved());
    }

    #[test]
    fn all_absent() {
        let s = status("abcde", "fghij");
        assert_eq!(s.value(), 0);
        assert_eq!(s.to_string(), "NNNNN");
    }

    #[test]
    fn duplicate_letters_match_takes_priority() {
        // ROBOT vs FLOOR: first O present, second O matched
        assert_eq!(status("robot", "floor").to_string(), "??NYN");
    }

    #[test]
    fn duplicate_letters_consume_available_copies() {
        // HELLO vs WORLD: the matched L uses WORLD's only L
        assert_eq!(status("hello", "world").to_string(), "NNNY?");
        assert_eq!(status("hello", "words").to_string(), "NNNN?");
    }

    #[test]
    fn parse_round_trips_display() {
        let s: Status = "?NYNN".parse().unwrap();
        assert_eq!(s.to_string(), "?NYNN");
        assert_eq!(
            s.marks(),
            [Mark::Present, Mark::Absent, Mark::Matched, Mark::Absent, Mark::Absent]
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!("?NY".parse::<Status>(), Err(StatusError::InvalidLength(3)));
        assert_eq!(
            "?NYNX".parse::<Status>(),
            Err(StatusError::InvalidSymbol('X'))
        );
        assert_eq!("ynynn".parse::<Status>(), Err(StatusError::InvalidSymbol('y')));
    }

    #[test]
    fn emoji_rendering() {
        let s: Status = "?NYNN".parse().unwrap();
        assert_eq!(s.to_emoji(), "🟨⬜🟩⬜⬜");
    }
}
