//! Complete tree command
//!
//! Builds the complete game tree for a word set and plays a batch on it.

use super::{PlayConfig, TreeRun, play_on_tree};
use crate::core::{Move, Word};
use crate::error::Result;
use crate::game::AdversarialWordle;
use crate::tree::build_complete_tree;
use std::time::Instant;

/// Build the complete tree of `depth` plies over `words` and play `config` on it
///
/// The tree is built from the initial game with the batch's guess limit.
///
/// # Errors
/// Returns any error from building the tree or playing the games.
pub fn run_complete(words: &[Word], depth: usize, config: &PlayConfig) -> Result<TreeRun> {
    let start = Instant::now();
    let game = AdversarialWordle::new(words, config.batch.max_guesses)?;
    let tree = build_complete_tree(Move::Start, &game, depth)?;
    let build_time = start.elapsed();
    log::info!(
        "built complete tree to depth {depth}: {} nodes in {:.2}s",
        tree.len(),
        build_time.as_secs_f64()
    );

    let report = play_on_tree(&tree, words, config)?;
    Ok(TreeRun {
        tree,
        build_time,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BatchConfig;
    use crate::policy::PolicyName;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn greedy_guesser_always_wins_on_a_full_depth_tree() {
        // Two guesses always suffice for three words that split on the first guess
        let words = words(&["hello", "words", "world"]);
        let config = PlayConfig::new(
            BatchConfig::new(25, 3).with_seed(5),
            PolicyName::GreedyTree,
            PolicyName::Random,
        );

        let run = run_complete(&words, 6, &config).unwrap();

        assert_eq!(run.report.guesser_wins, 25);
    }

    #[test]
    fn tree_depth_is_capped() {
        let words = words(&["hello", "words", "world"]);
        let config = PlayConfig::new(BatchConfig::new(1, 3), PolicyName::Random, PolicyName::GreedyTree);

        let run = run_complete(&words, 2, &config).unwrap();

        assert_eq!(run.tree.len(), 10);
        assert_eq!(run.tree.depth(), 2);
    }
}
