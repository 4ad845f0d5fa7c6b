//! Guesser that mixes greedy play with random exploration

use super::{TreeCursor, last_max};
use crate::core::{Move, Word};
use crate::error::{Result, check_probability};
use crate::game::{AdversarialWordle, Guesser, random_answer};
use crate::tree::GameTree;
use rand::Rng;

/// Greedy tree guesser that explores a random answer with probability `p`
///
/// Exploration only happens while the cursor still has children to choose
/// from; off the tree every guess is random anyway.
#[derive(Debug, Clone)]
pub struct ExploringGuesser<'t> {
    cursor: TreeCursor<'t>,
    exploration_probability: f64,
}

impl<'t> ExploringGuesser<'t> {
    /// # Errors
    /// Returns `Error::ProbabilityOutOfRange` unless `exploration_probability`
    /// lies within [0, 1].
    pub fn new(tree: &'t GameTree, exploration_probability: f64) -> Result<Self> {
        Ok(Self {
            cursor: TreeCursor::new(tree),
            exploration_probability: check_probability(exploration_probability)?,
        })
    }

    #[must_use]
    pub const fn exploration_probability(&self) -> f64 {
        self.exploration_probability
    }
}

impl Guesser for ExploringGuesser<'_> {
    fn make_guess<R: Rng + ?Sized>(
        &mut self,
        game: &AdversarialWordle,
        rng: &mut R,
    ) -> Result<Word> {
        self.cursor.follow_opponent(game);

        let children = self.cursor.children();
        if children.is_empty() {
            self.cursor.abandon();
            return random_answer(game, rng);
        }

        if rng.random::<f64>() < self.exploration_probability {
            let answer = random_answer(game, rng)?;
            self.cursor.step(&Move::Guess(answer.clone()));
            return Ok(answer);
        }

        match last_max(self.cursor.tree(), children) {
            Some(child) => self.cursor.advance_to_guess(child),
            None => random_answer(game, rng),
        }
    }
}
