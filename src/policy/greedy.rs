//! Tree policies that follow recorded win probabilities
//!
//! The guesser takes the child most likely to end in its win, the adversary
//! the least likely. Ties go to the child inserted last.

use super::{TreeCursor, last_max, last_min};
use crate::core::{Status, Word};
use crate::error::Result;
use crate::game::{AdversarialWordle, Adversary, Guesser, random_answer, random_status};
use crate::tree::GameTree;
use rand::Rng;

/// Guesser that plays the recorded guess with the highest win probability
#[derive(Debug, Clone)]
pub struct GreedyTreeGuesser<'t> {
    cursor: TreeCursor<'t>,
}

impl<'t> GreedyTreeGuesser<'t> {
    #[must_use]
    pub const fn new(tree: &'t GameTree) -> Self {
        Self {
            cursor: TreeCursor::new(tree),
        }
    }
}

impl Guesser for GreedyTreeGuesser<'_> {
    fn make_guess<R: Rng + ?Sized>(
        &mut self,
        game: &AdversarialWordle,
        rng: &mut R,
    ) -> Result<Word> {
        self.cursor.follow_opponent(game);
        match last_max(self.cursor.tree(), self.cursor.children()) {
            Some(child) => self.cursor.advance_to_guess(child),
            None => {
                self.cursor.abandon();
                random_answer(game, rng)
            }
        }
    }
}

/// Adversary that plays the recorded status with the lowest win probability
#[derive(Debug, Clone)]
pub struct GreedyTreeAdversary<'t> {
    cursor: TreeCursor<'t>,
}

impl<'t> GreedyTreeAdversary<'t> {
    #[must_use]
    pub const fn new(tree: &'t GameTree) -> Self {
        Self {
            cursor: TreeCursor::new(tree),
        }
    }
}

impl Adversary for GreedyTreeAdversary<'_> {
    fn make_status<R: Rng + ?Sized>(
        &mut self,
        game: &AdversarialWordle,
        rng: &mut R,
    ) -> Result<Status> {
        self.cursor.follow_opponent(game);
        match last_min(self.cursor.tree(), self.cursor.children()) {
            Some(child) => self.cursor.advance_to_status(child),
            None => {
                self.cursor.abandon();
                random_status(game, rng)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;
    use crate::game::{RandomAdversary, Winner, run_game};
    use crate::tree::build_complete_tree;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn guess(text: &str) -> Move {
        Move::from(word(text))
    }

    fn status(text: &str) -> Move {
        Move::from(text.parse::<Status>().unwrap())
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    #[test]
    fn guesser_prefers_last_of_equal_best() {
        let mut tree = GameTree::new();
        tree.insert_move_sequence(&[guess("reach")], 1.0).unwrap();
        tree.insert_move_sequence(&[guess("brawl")], 0.3).unwrap();
        tree.insert_move_sequence(&[guess("quart")], 1.0).unwrap();
        let game = AdversarialWordle::new(&words(&["reach", "brawl", "quart"]), 3).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let choice = GreedyTreeGuesser::new(&tree).make_guess(&game, &mut rng).unwrap();
        assert_eq!(choice, word("quart"));
    }

    #[test]
    fn adversary_prefers_last_of_equal_worst() {
        let mut tree = GameTree::new();
        tree.insert_move_sequence(&[guess("reach"), status("?NYNN")], 0.0)
            .unwrap();
        tree.insert_move_sequence(&[guess("reach"), status("NNYNN")], 0.0)
            .unwrap();
        tree.insert_move_sequence(&[guess("reach"), status("YYYYY")], 1.0)
            .unwrap();

        let mut game = AdversarialWordle::new(&words(&["reach", "brawl", "quart", "blank"]), 3).unwrap();
        game.record_guesser_move(word("reach")).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let choice = GreedyTreeAdversary::new(&tree).make_status(&game, &mut rng).unwrap();
        assert_eq!(Move::Status(choice), status("NNYNN"));
    }

    #[test]
    fn greedy_guesser_finishes_on_a_complete_tree() {
        let words = words(&["hello", "world"]);
        let game = AdversarialWordle::new(&words, 3).unwrap();
        let tree = build_complete_tree(Move::Start, &game, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(12);

        for _ in 0..10 {
            let finished = run_game(
                &mut GreedyTreeGuesser::new(&tree),
                &mut RandomAdversary,
                &words,
                3,
                &mut rng,
            )
            .unwrap();
            assert_eq!(finished.winner(), Some(Winner::Guesser));
        }
    }

    #[test]
    fn greedy_adversary_avoids_solved_leaves() {
        let words = words(&["hello", "words", "world"]);
        let game = AdversarialWordle::new(&words, 3).unwrap();
        let tree = build_complete_tree(Move::Start, &game, 2).unwrap();

        let mut started = game.clone();
        started.record_guesser_move(word("hello")).unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let status = GreedyTreeAdversary::new(&tree)
            .make_status(&started, &mut rng)
            .unwrap();

        assert!(!status.is_solved());
    }
}
