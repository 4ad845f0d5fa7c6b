//! Moves of Adversarial Wordle
//!
//! The guesser plays words and the adversary answers with statuses. The start
//! sentinel only labels the root of a tree and is never played.

use super::{Status, Word};
use std::fmt;

/// A single move in a game, or the start sentinel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// Sentinel labelling the root of a game tree
    Start,
    /// A word proposed by the guesser
    Guess(Word),
    /// Feedback revealed by the adversary
    Status(Status),
}

/// Which kind of move is allowed to follow another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Guess,
    Status,
}

impl MoveKind {
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Guess => "guess",
            Self::Status => "status",
        }
    }
}

impl Move {
    /// The kind of move that must come after this one
    ///
    /// Turns alternate: the start sentinel and every status hand the turn to
    /// the guesser, a guess hands it to the adversary.
    #[must_use]
    pub const fn next_kind(&self) -> MoveKind {
        match self {
            Self::Start | Self::Status(_) => MoveKind::Guess,
            Self::Guess(_) => MoveKind::Status,
        }
    }

    /// The kind of this move, or `None` for the start sentinel
    #[must_use]
    pub const fn kind(&self) -> Option<MoveKind> {
        match self {
            Self::Start => None,
            Self::Guess(_) => Some(MoveKind::Guess),
            Self::Status(_) => Some(MoveKind::Status),
        }
    }

    #[must_use]
    pub const fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }

    #[must_use]
    pub const fn as_guess(&self) -> Option<&Word> {
        match self {
            Self::Guess(word) => Some(word),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_status(&self) -> Option<Status> {
        match self {
            Self::Status(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<Word> for Move {
    fn from(word: Word) -> Self {
        Self::Guess(word)
    }
}

impl From<Status> for Move {
    fn from(status: Status) -> Self {
        Self::Status(status)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "*"),
            Self::Guess(word) => write!(f, "{word}"),
            Self::Status(status) => write!(f, "{status}"),
        }
    }
}
