//! Adversarial Wordle game state
//!
//! The guesser proposes words; the adversary, who has not committed to an
//! answer, replies with any status consistent with at least one remaining
//! candidate. Remaining candidates are filtered after every status.

use crate::core::{Move, Status, Word};
use crate::error::{Error, Result};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Winner of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Guesser,
    Adversary,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guesser => write!(f, "Guesser"),
            Self::Adversary => write!(f, "Adversary"),
        }
    }
}

/// Snapshot of one Adversarial Wordle game
///
/// Cloning is cheap enough for tree construction: the word set is shared and
/// only the move history and remaining candidates are copied.
#[derive(Debug, Clone)]
pub struct AdversarialWordle {
    word_set: Arc<FxHashSet<Word>>,
    max_guesses: usize,
    guesses: Vec<Word>,
    statuses: Vec<Status>,
    possible_answers: Vec<Word>,
}

impl AdversarialWordle {
    /// Start a new game over `words`
    ///
    /// Candidate order follows `words`, with duplicates dropped.
    ///
    /// # Errors
    /// Returns `Error::EmptyWordSet` or `Error::InvalidMaxGuesses`.
    pub fn new(words: &[Word], max_guesses: usize) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyWordSet);
        }
        if max_guesses == 0 {
            return Err(Error::InvalidMaxGuesses(max_guesses));
        }

        let mut word_set = FxHashSet::default();
        let possible_answers: Vec<Word> = words
            .iter()
            .filter(|word| word_set.insert((*word).clone()))
            .cloned()
            .collect();

        Ok(Self {
            word_set: Arc::new(word_set),
            max_guesses,
            guesses: Vec::new(),
            statuses: Vec::new(),
            possible_answers,
        })
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// The guesser moves whenever every guess has been answered
    #[inline]
    #[must_use]
    pub fn is_guesser_turn(&self) -> bool {
        self.guesses.len() == self.statuses.len()
    }

    /// Whether no move has been made yet
    #[inline]
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.guesses.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Candidates still consistent with every status so far
    #[inline]
    #[must_use]
    pub fn remaining_answers(&self) -> &[Word] {
        &self.possible_answers
    }

    /// Owned copy of the remaining candidates; callers may filter it freely
    #[must_use]
    pub fn possible_answers(&self) -> Vec<Word> {
        self.possible_answers.clone()
    }

    /// Candidates the adversary may answer for
    ///
    /// The word just guessed is excluded while any other candidate remains, so
    /// the adversary only concedes when forced to.
    #[must_use]
    pub fn adversary_candidates(&self) -> Vec<&Word> {
        let last_guess = self.guesses.last();
        let keep_all = self.possible_answers.len() <= 1;
        self.possible_answers
            .iter()
            .filter(|answer| keep_all || Some(*answer) != last_guess)
            .collect()
    }

    /// Interleaved guesses and statuses, oldest first
    ///
    /// Returns a fresh Vec on every call; mutating it never affects the game.
    #[must_use]
    pub fn move_sequence(&self) -> Vec<Move> {
        let mut sequence = Vec::with_capacity(self.guesses.len() + self.statuses.len());
        for (i, guess) in self.guesses.iter().enumerate() {
            sequence.push(Move::Guess(guess.clone()));
            if let Some(&status) = self.statuses.get(i) {
                sequence.push(Move::Status(status));
            }
        }
        sequence
    }

    /// The most recent move, if any
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        if self.is_guesser_turn() {
            self.statuses.last().copied().map(Move::Status)
        } else {
            self.guesses.last().cloned().map(Move::Guess)
        }
    }

    /// Status the last guess would receive if `answer` were the hidden word
    #[must_use]
    pub fn status_for_answer(&self, answer: &Word) -> Option<Status> {
        self.guesses
            .last()
            .map(|guess| Status::calculate(guess, answer))
    }

    /// `None` while the game is undecided
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        match self.statuses.last() {
            Some(status) if status.is_solved() => Some(Winner::Guesser),
            _ if self.statuses.len() >= self.max_guesses => Some(Winner::Adversary),
            _ => None,
        }
    }

    /// Record a guess
    ///
    /// # Errors
    /// Returns `Error::IllegalMove` if the game is over, it is the adversary's
    /// turn, or the word is not in the word set.
    pub fn record_guesser_move(&mut self, guess: Word) -> Result<()> {
        let refusal = self.refusal(true).or_else(|| {
            (!self.word_set.contains(&guess)).then_some("word is not in the word set")
        });
        if let Some(reason) = refusal {
            return Err(Error::illegal(&Move::Guess(guess), reason));
        }
        self.guesses.push(guess);
        Ok(())
    }

    /// Record a status and filter the remaining candidates
    ///
    /// # Errors
    /// Returns `Error::IllegalMove` if the game is over, it is the guesser's
    /// turn, or no remaining candidate is consistent with the status.
    pub fn record_adversary_move(&mut self, status: Status) -> Result<()> {
        let mv = Move::Status(status);
        if let Some(reason) = self.refusal(false) {
            return Err(Error::illegal(&mv, reason));
        }

        let Some(guess) = self.guesses.last() else {
            return Err(Error::illegal(&mv, "no guess to answer"));
        };
        let remaining: Vec<Word> = self
            .possible_answers
            .iter()
            .filter(|answer| Status::calculate(guess, answer) == status)
            .cloned()
            .collect();
        if remaining.is_empty() {
            return Err(Error::illegal(&mv, "no remaining answer is consistent with it"));
        }

        self.statuses.push(status);
        self.possible_answers = remaining;
        Ok(())
    }

    /// Copy this game and record a guess on the copy
    ///
    /// # Errors
    /// See `record_guesser_move`.
    pub fn copy_and_record_guesser_move(&self, guess: Word) -> Result<Self> {
        let mut next = self.clone();
        next.record_guesser_move(guess)?;
        Ok(next)
    }

    /// Copy this game and record a status on the copy
    ///
    /// # Errors
    /// See `record_adversary_move`.
    pub fn copy_and_record_adversary_move(&self, status: Status) -> Result<Self> {
        let mut next = self.clone();
        next.record_adversary_move(status)?;
        Ok(next)
    }

    /// Why a move by the given player would be refused right now
    fn refusal(&self, guesser: bool) -> Option<&'static str> {
        if self.winner().is_some() {
            Some("the game is already decided")
        } else if self.is_guesser_turn() != guesser {
            Some("it is not this player's turn")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn hello_game() -> AdversarialWordle {
        AdversarialWordle::new(&words(&["hello", "words", "world"]), 3).unwrap()
    }

    #[test]
    fn new_game_rejects_bad_configuration() {
        assert!(matches!(
            AdversarialWordle::new(&[], 3),
            Err(Error::EmptyWordSet)
        ));
        assert!(matches!(
            AdversarialWordle::new(&words(&["hello"]), 0),
            Err(Error::InvalidMaxGuesses(0))
        ));
    }

    #[test]
    fn new_game_drops_duplicate_words() {
        let game = AdversarialWordle::new(&words(&["hello", "world", "hello"]), 3).unwrap();
        assert_eq!(game.remaining_answers(), words(&["hello", "world"]).as_slice());
    }

    #[test]
    fn turns_alternate() {
        let mut game = hello_game();
        assert!(game.is_guesser_turn());
        game.record_guesser_move(word("hello")).unwrap();
        assert!(!game.is_guesser_turn());

        let status = game.status_for_answer(&word("world")).unwrap();
        game.record_adversary_move(status).unwrap();
        assert!(game.is_guesser_turn());
        assert_eq!(game.remaining_answers(), words(&["world"]).as_slice());
    }

    #[test]
    fn out_of_turn_moves_are_rejected() {
        let mut game = hello_game();
        assert!(game.record_adversary_move(Status::SOLVED).is_err());
        game.record_guesser_move(word("hello")).unwrap();
        assert!(game.record_guesser_move(word("world")).is_err());
    }

    #[test]
    fn unknown_guess_is_rejected() {
        let mut game = hello_game();
        let err = game.record_guesser_move(word("crane")).unwrap_err();
        assert!(matches!(err, Error::IllegalMove { .. }));
        assert!(game.is_initial());
    }

    #[test]
    fn inconsistent_status_is_rejected() {
        let mut game = hello_game();
        game.record_guesser_move(word("hello")).unwrap();
        let err = game
            .record_adversary_move("?????".parse().unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::IllegalMove { .. }));
        assert!(game.statuses().is_empty());
    }

    #[test]
    fn solved_status_wins_for_guesser() {
        let mut game = hello_game();
        game.record_guesser_move(word("words")).unwrap();
        game.record_adversary_move(Status::SOLVED).unwrap();
        assert_eq!(game.winner(), Some(Winner::Guesser));
        assert!(game.record_guesser_move(word("hello")).is_err());
    }

    #[test]
    fn adversary_wins_after_max_guesses() {
        let mut game = AdversarialWordle::new(&words(&["hello", "words", "world"]), 1).unwrap();
        game.record_guesser_move(word("hello")).unwrap();
        let status = game.status_for_answer(&word("words")).unwrap();
        game.record_adversary_move(status).unwrap();
        assert_eq!(game.winner(), Some(Winner::Adversary));
    }

    #[test]
    fn adversary_candidates_exclude_last_guess_unless_forced() {
        let mut game = hello_game();
        game.record_guesser_move(word("hello")).unwrap();
        let candidates: Vec<&str> = game
            .adversary_candidates()
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(candidates, ["words", "world"]);

        let status = game.status_for_answer(&word("world")).unwrap();
        game.record_adversary_move(status).unwrap();
        game.record_guesser_move(word("world")).unwrap();
        let candidates: Vec<&str> = game
            .adversary_candidates()
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(candidates, ["world"]);
    }

    #[test]
    fn move_sequence_is_copy_on_read() {
        let mut game = hello_game();
        game.record_guesser_move(word("hello")).unwrap();
        let status = game.status_for_answer(&word("world")).unwrap();
        game.record_adversary_move(status).unwrap();

        let mut sequence = game.move_sequence();
        let popped = sequence.pop();

        assert_eq!(popped, Some(Move::Status(status)));
        assert_eq!(game.move_sequence().len(), 2);
        assert_eq!(game.last_move(), Some(Move::Status(status)));
    }

    #[test]
    fn copies_are_independent() {
        let game = hello_game();
        let next = game.copy_and_record_guesser_move(word("hello")).unwrap();
        assert!(game.is_initial());
        assert_eq!(next.guesses(), words(&["hello"]).as_slice());

        let mut answers = game.possible_answers();
        answers.clear();
        assert_eq!(game.remaining_answers().len(), 3);
    }
}
