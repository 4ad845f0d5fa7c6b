//! Complete game tree construction
//!
//! Explores every move sequence reachable from a live game, up to a fixed
//! number of plies. Guesses are limited to the remaining answers, and the
//! adversary's statuses to those some remaining candidate would produce.

use super::{GameTree, NodeId};
use crate::core::Move;
use crate::error::{Error, Result};
use crate::game::{AdversarialWordle, Winner};
use rustc_hash::FxHashSet;
use std::borrow::Cow;

/// Build the complete game tree of `depth` plies below `root_move`
///
/// A guess root on a state still waiting for that guess is recorded first,
/// so every node's state already includes its own move. Each node's win
/// probability is 1.0 if the guesser has already won at that node and 0.0
/// otherwise; nothing is propagated up from descendants. Decided games and
/// `depth == 0` produce leaves.
///
/// The adversary may reach one status through several candidates; those
/// paths share a single child, since the game continues identically.
///
/// # Errors
/// Returns `Error::RootMoveMismatch` if `root_move` is inconsistent with
/// `game`, or any error the simulator raises while recording moves.
///
/// # Examples
/// ```
/// use wordle_gametree::core::{Move, Word};
/// use wordle_gametree::game::AdversarialWordle;
/// use wordle_gametree::tree::build_complete_tree;
///
/// let words: Vec<Word> = ["hello", "words", "world"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let game = AdversarialWordle::new(&words, 3).unwrap();
///
/// assert_eq!(build_complete_tree(Move::Start, &game, 0).unwrap().len(), 1);
/// assert_eq!(build_complete_tree(Move::Start, &game, 2).unwrap().len(), 10);
/// ```
pub fn build_complete_tree(
    root_move: Move,
    game: &AdversarialWordle,
    depth: usize,
) -> Result<GameTree> {
    let state = normalize(&root_move, game)?;
    let mut tree = GameTree::with_root(root_move);
    let root = tree.root();
    expand(&mut tree, root, &state, depth)?;

    log::debug!(
        "built complete tree to depth {depth}: {} nodes",
        tree.len()
    );
    Ok(tree)
}

/// Bring `game` to the state right after `root_move`
fn normalize<'g>(root_move: &Move, game: &'g AdversarialWordle) -> Result<Cow<'g, AdversarialWordle>> {
    let mismatch = |reason: &str| Error::RootMoveMismatch {
        root: root_move.to_string(),
        reason: reason.to_string(),
    };

    match root_move {
        Move::Start if game.is_initial() => Ok(Cow::Borrowed(game)),
        Move::Start => Err(mismatch("moves have already been made")),
        Move::Guess(word) if game.is_guesser_turn() => {
            Ok(Cow::Owned(game.copy_and_record_guesser_move(word.clone())?))
        }
        Move::Guess(word) if game.guesses().last() == Some(word) => Ok(Cow::Borrowed(game)),
        Move::Guess(_) => Err(mismatch("it is not the last guess made")),
        Move::Status(status)
            if game.is_guesser_turn() && game.statuses().last() == Some(status) =>
        {
            Ok(Cow::Borrowed(game))
        }
        Move::Status(_) => Err(mismatch("it is not the last status given")),
    }
}

fn expand(tree: &mut GameTree, node: NodeId, game: &AdversarialWordle, depth: usize) -> Result<()> {
    let winner = game.winner();
    let probability = if winner == Some(Winner::Guesser) { 1.0 } else { 0.0 };
    tree.set_win_probability(node, probability);

    if depth == 0 || winner.is_some() {
        return Ok(());
    }

    if game.is_guesser_turn() {
        for answer in game.remaining_answers() {
            let next = game.copy_and_record_guesser_move(answer.clone())?;
            let child = tree.attach(node, Move::Guess(answer.clone()));
            expand(tree, child, &next, depth - 1)?;
        }
    } else {
        let mut seen = FxHashSet::default();
        for answer in game.adversary_candidates() {
            let status = game
                .status_for_answer(answer)
                .ok_or(Error::NoGuessToAnswer)?;
            if !seen.insert(status) {
                continue;
            }
            let next = game.copy_and_record_adversary_move(status)?;
            let child = tree.attach(node, Move::Status(status));
            expand(tree, child, &next, depth - 1)?;
        }
    }

    Ok(())
}
