//! Seeded tree command
//!
//! Loads a tree from recorded games and plays a batch on it.

use super::{PlayConfig, TreeRun, play_on_tree};
use crate::core::Word;
use crate::error::Result;
use crate::tree::load_game_tree;
use std::path::Path;
use std::time::Instant;

/// Load the seed file at `path` and play `config` on the resulting tree
///
/// # Errors
/// Returns any error from loading the seed file or playing the games.
pub fn run_seeded(path: &Path, words: &[Word], config: &PlayConfig) -> Result<TreeRun> {
    let start = Instant::now();
    let tree = load_game_tree(path)?;
    let build_time = start.elapsed();

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
    use crate::wordlists::{STANDARD, loader::words_from_slice};

    #[test]
    fn sample_seed_file_plays_on_standard_words() {
        let words = words_from_slice(STANDARD);
        let config = PlayConfig::new(
            BatchConfig::new(30, 4).with_seed(1),
            PolicyName::RandomTree,
            PolicyName::RandomTree,
        );

        let run = run_seeded(Path::new("data/games/small_sample.csv"), &words, &config).unwrap();

        assert_eq!(run.tree.get_subtrees(run.tree.root()).len(), 6);
        assert_eq!(run.report.games(), 30);
    }
}
