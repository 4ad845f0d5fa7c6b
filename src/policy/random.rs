//! Tree policies that pick uniformly among recorded moves

use super::TreeCursor;
use crate::core::{Status, Word};
use crate::error::Result;
use crate::game::{AdversarialWordle, Adversary, Guesser, random_answer, random_status};
use crate::tree::GameTree;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Guesser that replays a uniformly random recorded guess
#[derive(Debug, Clone)]
pub struct RandomTreeGuesser<'t> {
    cursor: TreeCursor<'t>,
}

impl<'t> RandomTreeGuesser<'t> {
    #[must_use]
    pub const fn new(tree: &'t GameTree) -> Self {
        Self {
            cursor: TreeCursor::new(tree),
        }
    }
}

impl Guesser for RandomTreeGuesser<'_> {
    fn make_guess<R: Rng + ?Sized>(
        &mut self,
        game: &AdversarialWordle,
        rng: &mut R,
    ) -> Result<Word> {
        self.cursor.follow_opponent(game);
        match self.cursor.children().choose(rng) {
            Some(&child) => self.cursor.advance_to_guess(child),
            None => {
                self.cursor.abandon();
                random_answer(game, rng)
            }
        }
    }
}

/// Adversary that replays a uniformly random recorded status
#[derive(Debug, Clone)]
pub struct RandomTreeAdversary<'t> {
    cursor: TreeCursor<'t>,
}

impl<'t> RandomTreeAdversary<'t> {
    #[must_use]
    pub const fn new(tree: &'t GameTree) -> Self {
        Self {
            cursor: TreeCursor::new(tree),
        }
    }
}

impl Adversary for RandomTreeAdversary<'_> {
    fn make_status<R: Rng + ?Sized>(
        &mut self,
        game: &AdversarialWordle,
        rng: &mut R,
    ) -> Result<Status> {
        self.cursor.follow_opponent(game);
        match self.cursor.children().choose(rng) {
            Some(&child) => self.cursor.advance_to_status(child),
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
    use crate::tree::parse_game_tree;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SEED_ROWS: &str = "reach,?NYNN,brawl\nreach,?NYNN,quart\nallow\n";

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn game() -> AdversarialWordle {
        let words: Vec<Word> = ["reach", "brawl", "quart", "allow", "music"]
            .iter()
            .map(|w| word(w))
            .collect();
        AdversarialWordle::new(&words, 4).unwrap()
    }

    #[test]
    fn first_guess_comes_from_the_tree() {
        let tree = parse_game_tree(SEED_ROWS.as_bytes()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            let mut guesser = RandomTreeGuesser::new(&tree);
            let guess = guesser.make_guess(&game(), &mut rng).unwrap();
            assert!(guess == word("reach") || guess == word("allow"));
        }
    }

    #[test]
    fn guesser_follows_a_recorded_line() {
        let tree = parse_game_tree("reach,?NYNN,brawl\nreach,?NYNN,quart\n".as_bytes()).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = game();
        let mut guesser = RandomTreeGuesser::new(&tree);

        let first = guesser.make_guess(&game, &mut rng).unwrap();
        assert_eq!(first, word("reach"));
        game.record_guesser_move(first).unwrap();
        game.record_adversary_move("?NYNN".parse().unwrap()).unwrap();

        let second = guesser.make_guess(&game, &mut rng).unwrap();
        assert!(second == word("brawl") || second == word("quart"));
    }

    #[test]
    fn adversary_replays_recorded_status() {
        let tree = parse_game_tree(SEED_ROWS.as_bytes()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = game();
        game.record_guesser_move(word("reach")).unwrap();

        let mut adversary = RandomTreeAdversary::new(&tree);
        let status = adversary.make_status(&game, &mut rng).unwrap();

        assert_eq!(Move::Status(status).to_string(), "?NYNN");
    }

    #[test]
    fn off_tree_guess_falls_back_to_random_status() {
        let tree = parse_game_tree(SEED_ROWS.as_bytes()).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = game();
        game.record_guesser_move(word("music")).unwrap();

        let mut adversary = RandomTreeAdversary::new(&tree);
        let status = adversary.make_status(&game, &mut rng).unwrap();

        assert!(!status.is_solved());
        assert!(game.copy_and_record_adversary_move(status).is_ok());
    }

    #[test]
    fn empty_tree_falls_back_to_random_guess() {
        let tree = GameTree::new();
        let mut rng = StdRng::seed_from_u64(5);
        let game = game();

        let guess = RandomTreeGuesser::new(&tree).make_guess(&game, &mut rng).unwrap();
        assert!(game.remaining_answers().contains(&guess));
    }
}
