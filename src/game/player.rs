//! Player interfaces and the baseline random players
//!
//! Players receive an immutable view of the game and an injected random
//! source, and answer with their next move.

use super::AdversarialWordle;
use crate::core::{Status, Word};
use crate::error::{Error, Result};
use rand::Rng;
use rand::seq::IndexedRandom;

/// A player that proposes guesses
pub trait Guesser {
    /// Choose the next guess
    ///
    /// # Errors
    /// Returns an error if no legal guess can be chosen.
    fn make_guess<R: Rng + ?Sized>(
        &mut self,
        game: &AdversarialWordle,
        rng: &mut R,
    ) -> Result<Word>;
}

/// A player that answers guesses with statuses
pub trait Adversary {
    /// Choose the status for the latest guess
    ///
    /// # Errors
    /// Returns an error if no legal status can be chosen.
    fn make_status<R: Rng + ?Sized>(
        &mut self,
        game: &AdversarialWordle,
        rng: &mut R,
    ) -> Result<Status>;
}

/// Pick a uniformly random remaining answer
///
/// # Errors
/// Returns `Error::EmptyCandidatePool` if no candidates remain.
pub fn random_answer<R: Rng + ?Sized>(game: &AdversarialWordle, rng: &mut R) -> Result<Word> {
    game.remaining_answers()
        .choose(rng)
        .cloned()
        .ok_or(Error::EmptyCandidatePool)
}

/// Status for a uniformly random candidate, conceding only when forced
///
/// # Errors
/// Returns `Error::EmptyCandidatePool` if no candidates remain.
pub fn random_status<R: Rng + ?Sized>(game: &AdversarialWordle, rng: &mut R) -> Result<Status> {
    let candidates = game.adversary_candidates();
    let answer = candidates.choose(rng).ok_or(Error::EmptyCandidatePool)?;
    game.status_for_answer(answer).ok_or(Error::NoGuessToAnswer)
}

/// Guesser that picks uniformly among the remaining answers
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn make_guess<R: Rng + ?Sized>(
        &mut self,
        game: &AdversarialWordle,
        rng: &mut R,
    ) -> Result<Word> {
        random_answer(game, rng)
    }
}

/// Adversary that answers for a uniformly random candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAdversary;

impl Adversary for RandomAdversary {
    fn make_status<R: Rng + ?Sized>(
        &mut self,
        game: &AdversarialWordle,
        rng: &mut R,
    ) -> Result<Status> {
        random_status(game, rng)
    }
}
