//! Core domain types for Adversarial Wordle
//!
//! Words, statuses and the moves built from them. These types know nothing
//! about trees or players.

mod moves;
mod status;
mod word;

pub use moves::{Move, MoveKind};
pub use status::{Mark, Status, StatusError};
pub use word::{WORD_LENGTH, Word, WordError};
