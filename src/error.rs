//! Error types for the game tree crate

use crate::core::{Move, StatusError, WordError};
use thiserror::Error;

/// Main error type for the crate
///
/// Contract violations (parity, root identity, probability range) are reported
/// before anything is mutated, so a failed call leaves its tree untouched.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("move '{found}' cannot follow '{parent}': expected a {expected}")]
    ParityViolation {
        parent: String,
        found: String,
        expected: &'static str,
    },

    #[error("the start sentinel may only appear at the root of a tree")]
    MisplacedStart,

    #[error("root move '{root}' does not match the game state: {reason}")]
    RootMoveMismatch { root: String, reason: String },

    #[error("probability {value} must lie within [0.0, 1.0]")]
    ProbabilityOutOfRange { value: f64 },

    #[error("at least one exploration probability is required")]
    NoExplorationProbabilities,

    #[error("malformed seed row {row}: {reason}")]
    MalformedSeedRow { row: usize, reason: String },

    #[error("no candidate answers remain to choose a move from")]
    EmptyCandidatePool,

    #[error("there is no guess to answer yet")]
    NoGuessToAnswer,

    #[error("illegal move '{mv}': {reason}")]
    IllegalMove { mv: String, reason: String },

    #[error("word set must contain at least one word")]
    EmptyWordSet,

    #[error("max guesses must be at least 1, got {0}")]
    InvalidMaxGuesses(usize),

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("invalid status: {0}")]
    InvalidStatus(#[from] StatusError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn illegal(mv: &Move, reason: impl Into<String>) -> Self {
        Self::IllegalMove {
            mv: mv.to_string(),
            reason: reason.into(),
        }
    }
}

/// Check that `value` is a usable probability
///
/// # Errors
/// Returns `Error::ProbabilityOutOfRange` for values outside [0, 1] or NaN.
pub fn check_probability(value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::ProbabilityOutOfRange { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_bounds_are_inclusive() {
        assert_eq!(check_probability(0.0).unwrap(), 0.0);
        assert_eq!(check_probability(1.0).unwrap(), 1.0);
        assert!(check_probability(1.5).is_err());
        assert!(check_probability(-0.1).is_err());
        assert!(check_probability(f64::NAN).is_err());
    }

    #[test]
    fn seed_row_error_names_row() {
        let err = Error::MalformedSeedRow {
            row: 4,
            reason: "bad token".to_string(),
        };
        assert_eq!(err.to_string(), "malformed seed row 4: bad token");
    }
}
